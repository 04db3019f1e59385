//! Benchmarks for the care rules
//!
//! Run with: cargo bench --package care
//!
//! Uses a synthetic history of 500 users with four shoes each.

use care::{CareThresholds, WeatherCondition, care_tips, notifications_and_replacements};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{
    CareKind, CareRecord, Color, Interaction, InteractionKind, Material, Shoe, ShoeType, Usage,
    User,
};

struct Fixture {
    users: Vec<User>,
    shoes: Vec<Shoe>,
    interactions: Vec<Interaction>,
    care_history: Vec<CareRecord>,
    now: NaiveDateTime,
}

fn build_fixture() -> Fixture {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid date");
    let usages = [Usage::Running, Usage::Formal, Usage::Casual];

    let shoes: Vec<Shoe> = (1..=200)
        .map(|id| Shoe {
            shoe_id: id,
            brand: "Brand".to_string(),
            model: format!("Model {}", id),
            shoe_type: ShoeType::ALL[id as usize % 3],
            color: Color::ALL[id as usize % 4],
            material: Material::ALL[id as usize % 3],
        })
        .collect();

    let mut users = Vec::new();
    let mut interactions = Vec::new();
    let mut care_history = Vec::new();
    for user_id in 1..=500u32 {
        users.push(User {
            user_id,
            typical_usage: usages[user_id as usize % 3],
            preferred_color: "Black".to_string(),
        });
        for k in 0..4u32 {
            let shoe_id = (user_id * 7 + k * 13) % 200 + 1;
            care_history.push(CareRecord {
                user_id,
                shoe_id,
                care_type: CareKind::Clean,
                timestamp: now - Duration::days(((user_id + k) % 60) as i64),
            });
            for v in 0..12 {
                interactions.push(Interaction {
                    user_id,
                    shoe_id,
                    kind: InteractionKind::View,
                    timestamp: now - Duration::days(v),
                });
            }
            interactions.push(Interaction {
                user_id,
                shoe_id,
                kind: InteractionKind::Purchase,
                timestamp: now - Duration::days(((user_id * 3) % 500) as i64),
            });
        }
    }

    Fixture {
        users,
        shoes,
        interactions,
        care_history,
        now,
    }
}

fn bench_services(c: &mut Criterion) {
    let f = build_fixture();
    let thresholds = CareThresholds::default();

    c.bench_function("notifications_and_replacements", |b| {
        b.iter(|| {
            let report = notifications_and_replacements(
                black_box(&f.care_history),
                black_box(&f.shoes),
                black_box(&f.interactions),
                WeatherCondition::Rainy,
                &thresholds,
                f.now,
            );
            black_box(report)
        })
    });
}

fn bench_care_tips(c: &mut Criterion) {
    let f = build_fixture();
    let thresholds = CareThresholds::default();

    c.bench_function("care_tips", |b| {
        b.iter(|| {
            let tips = care_tips(
                black_box(&f.users),
                black_box(&f.care_history),
                black_box(&f.shoes),
                WeatherCondition::Cold,
                &thresholds,
                f.now,
                None,
            );
            black_box(tips)
        })
    });
}

criterion_group!(benches, bench_services, bench_care_tips);
criterion_main!(benches);
