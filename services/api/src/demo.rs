use crate::infra::{parse_sort_key, sample_baselines, sample_connections, sample_policies};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use policy_atlas::error::AppError;
use policy_atlas::workflows::evidence::EvidenceCsvImporter;
use policy_atlas::workflows::rankings::{
    assemble_rankings, sort_rankings, summarize, Policy, RankingSortKey, RankingSummary,
    StateRanking,
};

#[derive(Args, Debug)]
pub(crate) struct RankingReportArgs {
    /// Connections CSV export from the hosted evidence table
    #[arg(long)]
    pub(crate) evidence_csv: PathBuf,
    /// Optional baseline workforce CSV export
    #[arg(long)]
    pub(crate) baselines_csv: Option<PathBuf>,
    /// Optional policies JSON file (array of policy records)
    #[arg(long)]
    pub(crate) policies_json: Option<PathBuf>,
    /// Ranking order: score, alpha, connections, or policies
    #[arg(long, default_value = "score", value_parser = parse_sort_key)]
    pub(crate) sort: RankingSortKey,
    /// Include the full per-state breakdown in the output
    #[arg(long)]
    pub(crate) list_states: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Ranking order: score, alpha, connections, or policies
    #[arg(long, default_value = "score", value_parser = parse_sort_key)]
    pub(crate) sort: RankingSortKey,
    /// Include the full per-state breakdown in the output
    #[arg(long)]
    pub(crate) list_states: bool,
}

pub(crate) fn run_ranking_report(args: RankingReportArgs) -> Result<(), AppError> {
    let RankingReportArgs {
        evidence_csv,
        baselines_csv,
        policies_json,
        sort,
        list_states,
    } = args;

    let connections = EvidenceCsvImporter::connections_from_path(&evidence_csv)?;
    let baselines = match baselines_csv {
        Some(path) => EvidenceCsvImporter::baselines_from_path(path)?,
        None => Vec::new(),
    };
    let policies = match policies_json {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            serde_json::from_str::<Vec<Policy>>(&raw)?
        }
        None => Vec::new(),
    };

    let mut rankings = assemble_rankings(&connections, &policies, &baselines);
    sort_rankings(&mut rankings, sort);
    let summary = summarize(&rankings);

    render_ranking_report(&rankings, &summary, sort, "CSV export", list_states);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { sort, list_states } = args;

    println!("Workforce ranking demo");

    let connections = sample_connections();
    let policies = sample_policies();
    let baselines = sample_baselines();

    let mut rankings = assemble_rankings(&connections, &policies, &baselines);
    sort_rankings(&mut rankings, sort);
    let summary = summarize(&rankings);

    render_ranking_report(&rankings, &summary, sort, "built-in sample dataset", list_states);

    if let Some(top) = rankings
        .iter()
        .max_by_key(|ranking| ranking.workforce_impact_score)
    {
        match serde_json::to_string_pretty(top) {
            Ok(json) => println!("\nTop-ranked state payload:\n{}", json),
            Err(err) => println!("\nTop-ranked state payload unavailable: {}", err),
        }
    }

    Ok(())
}

pub(crate) fn render_ranking_report(
    rankings: &[StateRanking],
    summary: &RankingSummary,
    sort: RankingSortKey,
    data_source: &str,
    list_states: bool,
) {
    let today = Local::now().date_naive();
    println!("State workforce impact ranking (evaluated {today})");
    println!("Data source: {data_source} | ordered by {}", sort.label());

    if rankings.is_empty() {
        println!("\nNo states to rank: supply connections or baseline records");
        return;
    }

    println!();
    for (position, ranking) in rankings.iter().enumerate() {
        println!(
            "{:>2}. {:<22} {:>3} ({:<2}) | {} connections ({}+ / {}-) | {} policies | {} papers | confidence {}% +/-{} [{}]",
            position + 1,
            ranking.state,
            ranking.workforce_impact_score,
            ranking.grade.letter,
            ranking.total_connections,
            ranking.positive_connections,
            ranking.negative_connections,
            ranking.distinct_policy_count,
            ranking.distinct_paper_count,
            ranking.confidence.confidence_level,
            ranking.confidence.uncertainty_range,
            ranking.confidence.data_quality.label(),
        );
    }

    println!("\nSummary");
    println!("- {} states ranked, {} backed by connections", summary.total_states, summary.states_with_data);
    println!(
        "- Scores: average {}, highest {}, lowest {}",
        summary.average_score, summary.highest_score, summary.lowest_score
    );
    if !summary.grade_distribution.is_empty() {
        let histogram: Vec<String> = summary
            .grade_distribution
            .iter()
            .map(|(letter, count)| format!("{letter}: {count}"))
            .collect();
        println!("- Grades: {}", histogram.join(", "));
    }

    if list_states {
        println!("\nPer-state breakdown");
        for ranking in rankings {
            println!(
                "- {} | {} {} | score range {}-{}",
                ranking.state,
                ranking.grade.letter,
                ranking.grade.description,
                ranking.confidence.score_low,
                ranking.confidence.score_high
            );
            println!(
                "  avg strength {:.2} | avg relevance {:.2} | positive rate {:.2} | evidence quality {:.2}",
                ranking.average_strength,
                ranking.average_workforce_relevance,
                ranking.positive_connection_rate,
                ranking.evidence_quality_score
            );
            println!(
                "  sub-scores: policy effectiveness {} | evidence strength {} | population impact {}",
                ranking.policy_effectiveness_score,
                ranking.evidence_strength_score,
                ranking.population_impact_score
            );
            println!(
                "  evidence tiers: {} strong / {} moderate / {} weak | baseline data: {}",
                ranking.strong_evidence_count,
                ranking.moderate_evidence_count,
                ranking.weak_evidence_count,
                if ranking.has_baseline_data { "yes" } else { "no" }
            );
        }
    }
}
