//! Property tests over generated instances.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use u_assign::generator::{GeneratorConfig, InstanceGenerator};
use u_assign::greedy::{verify, AssignConfig, Assignment, GreedyAssigner, TieBreaker};
use u_assign::io::{format_output, parse_output};
use u_assign::model::{Instance, MetricVector, Sample, Tool};
use u_assign::scoring::fit_score;

fn instance_strategy() -> impl Strategy<Value = Instance> {
    (any::<u64>(), 1usize..6, 0usize..40, 1usize..6, 1i64..20).prop_map(
        |(seed, tools, samples, pref_len, max)| {
            let config = GeneratorConfig::default()
                .with_tools(tools)
                .with_samples(samples)
                .with_preference_len(pref_len)
                .with_max_metric(max)
                .with_max_need(max)
                .with_seed(seed);
            InstanceGenerator::generate(&config).unwrap()
        },
    )
}

/// Brute-force check of the greedy order, independent of the assigner's
/// own candidate code: replays the decision log with plain loops and
/// returns the first step where an unassigned sample offered a strictly
/// better `(score, -rank)` than the committed pair.
fn first_better_candidate(instance: &Instance, result: &Assignment) -> Option<String> {
    let capacity = instance.sample_count() / instance.tool_count();
    let mut loads: HashMap<&str, usize> = HashMap::new();
    let mut assigned: HashSet<&str> = HashSet::new();

    let first_open = |loads: &HashMap<&str, usize>, sample: &Sample| {
        for (rank, tool_id) in sample.preferences.iter().enumerate() {
            if loads.get(tool_id.as_str()).copied().unwrap_or(0) < capacity {
                let tool = instance.tool(tool_id).unwrap();
                return Some((fit_score(tool, sample), rank, tool_id.clone()));
            }
        }
        None
    };

    for decision in &result.decisions {
        if instance.sample(&decision.sample_id).is_none() {
            return Some(format!("step {}: unknown sample {}", decision.step, decision.sample_id));
        }
        let committed = (decision.score, Reverse(decision.rank));
        for sample in instance.samples() {
            if assigned.contains(sample.id.as_str()) {
                continue;
            }
            let open = first_open(&loads, sample);
            if sample.id == decision.sample_id {
                let expected = (decision.score, decision.rank, decision.tool_id.as_str());
                let matches = open
                    .as_ref()
                    .is_some_and(|(score, rank, tool_id)| (*score, *rank, tool_id.as_str()) == expected);
                if !matches {
                    return Some(format!(
                        "step {}: {} committed to {}, first open preference is {:?}",
                        decision.step, decision.sample_id, decision.tool_id, open
                    ));
                }
                continue;
            }
            if let Some((score, rank, _)) = open {
                if (score, Reverse(rank)) > committed {
                    return Some(format!(
                        "step {}: {} ({score}, rank {rank}) beats committed {} ({}, rank {})",
                        decision.step, sample.id, decision.sample_id, decision.score, decision.rank
                    ));
                }
            }
        }
        if !assigned.insert(decision.sample_id.as_str()) {
            return Some(format!("{} committed twice", decision.sample_id));
        }
        *loads.entry(decision.tool_id.as_str()).or_insert(0) += 1;
    }

    instance
        .samples()
        .iter()
        .filter(|s| !assigned.contains(s.id.as_str()))
        .find(|s| first_open(&loads, s).is_some())
        .map(|s| format!("{} still had an open preference when the run stopped", s.id))
}

fn tie_breaker_strategy() -> impl Strategy<Value = TieBreaker> {
    prop_oneof![Just(TieBreaker::InputOrder), Just(TieBreaker::SampleId)]
}

proptest! {
    #[test]
    fn capacity_is_never_exceeded(instance in instance_strategy()) {
        let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
        let capacity = instance.sample_count() / instance.tool_count();
        prop_assert_eq!(result.capacity, capacity);
        for t in &result.tools {
            prop_assert!(t.placements.len() <= capacity);
        }
    }

    #[test]
    fn every_sample_placed_at_most_once(instance in instance_strategy()) {
        let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
        let mut seen = HashSet::new();
        for (_, sample, _) in result.triples() {
            prop_assert!(seen.insert(sample));
        }
        prop_assert_eq!(seen.len() + result.unassigned.len(), instance.sample_count());
    }

    #[test]
    fn full_preferences_place_everyone(
        seed in any::<u64>(),
        tools in 1usize..5,
        per_tool in 0usize..6,
    ) {
        // Every sample lists every tool and N is a multiple of T.
        let config = GeneratorConfig::default()
            .with_tools(tools)
            .with_samples(tools * per_tool)
            .with_preference_len(tools)
            .with_seed(seed);
        let instance = InstanceGenerator::generate(&config).unwrap();
        let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
        prop_assert!(result.unassigned.is_empty());
    }

    #[test]
    fn recorded_scores_are_dot_products(instance in instance_strategy()) {
        let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
        for (tool_id, sample_id, score) in result.triples() {
            let tool = instance.tool(&tool_id).unwrap();
            let sample = instance.sample(&sample_id).unwrap();
            let manual = tool.metrics.speed * sample.needs.speed
                + tool.metrics.accuracy * sample.needs.accuracy
                + tool.metrics.cost * sample.needs.cost;
            prop_assert_eq!(score, manual);
        }
    }

    #[test]
    fn decision_log_replays_cleanly(
        instance in instance_strategy(),
        tb in tie_breaker_strategy(),
    ) {
        let config = AssignConfig::default().with_tie_breaker(tb);
        let result = GreedyAssigner::run(&instance, &config).unwrap();
        prop_assert_eq!(verify(&instance, &result, &config), Ok(()));
    }

    #[test]
    fn no_step_passes_over_a_better_candidate(
        instance in instance_strategy(),
        tb in tie_breaker_strategy(),
    ) {
        let config = AssignConfig::default().with_tie_breaker(tb);
        let result = GreedyAssigner::run(&instance, &config).unwrap();
        prop_assert_eq!(first_better_candidate(&instance, &result), None);
    }

    #[test]
    fn runs_are_deterministic(instance in instance_strategy()) {
        let config = AssignConfig::default();
        let first = GreedyAssigner::run(&instance, &config).unwrap();
        let second = GreedyAssigner::run(&instance, &config).unwrap();
        prop_assert_eq!(format_output(&first), format_output(&second));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parallel_scan_matches_sequential(instance in instance_strategy()) {
        let seq = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
        let par = GreedyAssigner::run(&instance, &AssignConfig::default().with_parallel(true))
            .unwrap();
        prop_assert_eq!(seq, par);
    }

    #[test]
    fn output_round_trips(instance in instance_strategy()) {
        let result = GreedyAssigner::run(&instance, &AssignConfig::default()).unwrap();
        let parsed = parse_output(&format_output(&result)).unwrap();
        prop_assert_eq!(parsed, result.tools);
    }

    #[test]
    fn fit_score_is_dot_product(
        t in prop::array::uniform3(-50i64..50),
        n in prop::array::uniform3(-50i64..50),
    ) {
        let tool = Tool::new("T", MetricVector::new(t[0], t[1], t[2]));
        let sample = Sample::new("M", MetricVector::new(n[0], n[1], n[2]), ["T"]);
        prop_assert_eq!(fit_score(&tool, &sample), t[0] * n[0] + t[1] * n[1] + t[2] * n[2]);
    }
}
