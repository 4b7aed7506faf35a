use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bigiots::core::{placement_rng, EnemySwarm, NullDisplay, RockField, Round};
use bigiots::types::{Key, Position, RoundConfig};

fn bench_round_start(c: &mut Criterion) {
    let mut rng = placement_rng(Some(12345));

    c.bench_function("round_start", |b| {
        b.iter(|| Round::start(black_box(RoundConfig::default()), &mut rng, &mut NullDisplay))
    });
}

fn bench_swarm_advance(c: &mut Criterion) {
    let mut rng = placement_rng(Some(12345));
    let rocks = RockField::place_random(120, RoundConfig::default().grid, &mut rng, &mut NullDisplay)
        .unwrap();
    let swarm = EnemySwarm::place_random(
        12,
        RoundConfig::default().grid,
        &rocks,
        &mut rng,
        &mut NullDisplay,
    )
    .unwrap();
    let player = Position::new(20, 11);

    c.bench_function("swarm_advance_12", |b| {
        b.iter(|| {
            let mut swarm = swarm.clone();
            let mut rocks = rocks.clone();
            swarm.advance(black_box(player), &mut rocks, 0, &mut NullDisplay)
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut rng = placement_rng(Some(12345));
    let round = Round::start(RoundConfig::default(), &mut rng, &mut NullDisplay).unwrap();

    c.bench_function("round_tick", |b| {
        b.iter(|| {
            let mut round = round.clone();
            round.tick(black_box(Key::Char('i')), &mut NullDisplay)
        })
    });
}

criterion_group!(benches, bench_round_start, bench_swarm_advance, bench_tick);
criterion_main!(benches);
