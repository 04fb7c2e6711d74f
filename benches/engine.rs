use chrono::{Days, NaiveDate, Utc};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stay_eng::engine::is_available;
use stay_eng::model::{BookingRecord, BookingStatus};
use stay_eng::{Amount, BookingRequest, Engine, MealPlan, MemoryStore};

/// Generates non-overlapping two-night stays for benchmarking.
///
/// Stays cycle through the three catalog rooms; within a room, consecutive
/// stays are back-to-back, so every generated stay is bookable.
struct StayGenerator {
    base: NaiveDate,
    next: u64,
}

impl StayGenerator {
    fn new() -> Self {
        Self {
            base: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            next: 0,
        }
    }
}

impl Iterator for StayGenerator {
    /// `(room_id, check_in, check_out)`
    type Item = (String, NaiveDate, NaiveDate);

    fn next(&mut self) -> Option<Self::Item> {
        let room = (self.next % 3 + 1).to_string();
        let slot = self.next / 3;
        let check_in = self.base + Days::new(slot * 2);
        let check_out = check_in + Days::new(2);
        self.next += 1;
        Some((room, check_in, check_out))
    }
}

fn record(room: String, check_in: NaiveDate, check_out: NaiveDate, n: u64) -> BookingRecord {
    BookingRecord {
        id: format!("booking_{n}"),
        room_id: room,
        guest_name: "Guest".to_string(),
        email: "guest@example.com".to_string(),
        phone: "+254700000000".to_string(),
        check_in,
        check_out,
        guests: 1,
        special_requests: None,
        meal_plan: MealPlan::BedOnly,
        status: BookingStatus::Pending,
        total_amount: Amount::new(2000),
        created_at: Utc::now(),
    }
}

fn request(room: String, check_in: NaiveDate, check_out: NaiveDate) -> BookingRequest {
    BookingRequest {
        guest_name: "Guest".to_string(),
        email: "guest@example.com".to_string(),
        phone: "+254700000000".to_string(),
        check_in,
        check_out,
        guests: 1,
        room_id: room,
        meal_plan: MealPlan::BedOnly,
        special_requests: None,
    }
}

fn bench_availability_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("availability_scan");

    for count in [100u64, 1_000, 10_000] {
        let existing: Vec<BookingRecord> = StayGenerator::new()
            .take(count as usize)
            .enumerate()
            .map(|(n, (room, check_in, check_out))| record(room, check_in, check_out, n as u64))
            .collect();

        // Probe a stay past every generated one, forcing a full scan.
        let probe_in = NaiveDate::from_ymd_opt(2150, 1, 1).unwrap();
        let probe_out = probe_in + Days::new(2);

        group.bench_with_input(BenchmarkId::from_parameter(count), &existing, |b, existing| {
            b.iter(|| black_box(is_available("1", probe_in, probe_out, existing)));
        });
    }

    group.finish();
}

fn bench_create_bookings(c: &mut Criterion) {
    let mut group = c.benchmark_group("create_bookings");
    group.sample_size(10);

    // Each creation re-reads and rewrites the whole collection, so cost
    // grows with the number of stored bookings.
    for count in [100usize, 500] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let engine = Engine::new(MemoryStore::new());
                for (room, check_in, check_out) in StayGenerator::new().take(count) {
                    let result = engine.create_booking(request(room, check_in, check_out));
                    let _ = black_box(result);
                }
                engine
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_availability_scan, bench_create_bookings);
criterion_main!(benches);
