use criterion::{Criterion, criterion_group, criterion_main};
use note_placer::vault::RecordingNotifier;
use note_placer::{InMemoryVault, PlacementConfig, PlacementMode, PlacementPolicy, Rule, RuleSet};
use std::hint::black_box;

fn rule_heavy_config() -> PlacementConfig {
    let mut rules = Vec::new();
    for i in 0..50 {
        rules.push(Rule::new(&format!("/area{i}/${{*}}"), &format!("/area{i}/inbox")));
    }
    rules.push(Rule::new("/projects/${*}", "${current}/drafts"));
    PlacementConfig::new(PlacementMode::RuleBased).with_rules(RuleSet::new(rules))
}

fn bench_resolve(c: &mut Criterion) {
    let vault = InMemoryVault::new()
        .with_folder("projects/alpha/drafts")
        .with_folder("area7/inbox");
    let notifier = RecordingNotifier::new();
    let policy = PlacementPolicy::new(rule_heavy_config(), &vault, &notifier);

    c.bench_function("resolve_direct_match", |b| {
        b.iter(|| policy.resolve(black_box("/projects/alpha/note.md")))
    });

    c.bench_function("resolve_deep_walk", |b| {
        b.iter(|| policy.resolve(black_box("/area7/x/y/z/w/note.md")))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
