use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Datelike, Local};
use clap::Args;

use conselho::diagnostics::questions::behavioral_questions;
use conselho::error::AppError;
use conselho::insight::DisabledClient;
use conselho::people::{Employee, EmployeeStatus, SkillRatings};
use conselho::projects::{Lane, ProjectTask};
use conselho::store::{InMemoryUserStore, UserId};

use crate::infra::{ModelClient, Services};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Account to run the walkthrough under.
    #[arg(long, default_value = "demo-owner")]
    pub(crate) user: String,
    /// Optional financial plan CSV (month,line,planned,real) to import.
    #[arg(long)]
    pub(crate) plan_csv: Option<PathBuf>,
}

/// Offline walkthrough of every module against an in-memory store. Narrative
/// generation is disabled, so assessments carry the placeholder analysis.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryUserStore::default());
    let services = Services::new(store, Arc::new(ModelClient::Disabled(DisabledClient)));
    let user = UserId::from(args.user.clone());

    println!("== Diagnostics ==");
    let mut strategic_answers = BTreeMap::new();
    for id in ['A', 'F', 'B', 'C', 'D', 'G'] {
        strategic_answers.insert(id, true);
    }
    let strategic = services
        .diagnostics
        .save_strategic(&user, strategic_answers)
        .map_err(demo_error)?;
    println!(
        "strategic scores: operational {}/8, tactical {}/8, strategic {}/8",
        strategic.record.scores.operational,
        strategic.record.scores.tactical,
        strategic.record.scores.strategic
    );

    let checked: BTreeSet<u8> = (0..17).collect();
    let phase = services
        .diagnostics
        .save_phase(&user, checked)
        .map_err(demo_error)?;
    println!(
        "phase: {} ({} of 30 items)",
        phase.record.phase_name, phase.record.total_score
    );

    let behavioral_answers: BTreeMap<u8, u8> = behavioral_questions()
        .iter()
        .map(|question| (question.number, question.options[1].profile.number()))
        .collect();
    let behavioral = services
        .diagnostics
        .save_behavioral(&user, behavioral_answers)
        .map_err(demo_error)?;
    println!(
        "dominant profile: type {} - {}",
        behavioral.record.dominant_number, behavioral.record.dominant_name
    );

    println!();
    println!("== Finance ==");
    if let Some(path) = args.plan_csv {
        let rows = services
            .finance
            .import_csv(&user, std::fs::File::open(&path)?)
            .map_err(demo_error)?;
        println!("imported {rows} plan rows from {}", path.display());
    } else {
        let csv = "month,line,planned,real\n\
                   2026-01,revProducts,10000,9500\n\
                   2026-01,costFixed,4000,4100\n\
                   2026-02,revProducts,10000,11200\n";
        let rows = services
            .finance
            .import_csv(&user, csv.as_bytes())
            .map_err(demo_error)?;
        println!("imported {rows} sample plan rows");
    }
    let plan = services.finance.annual_plan(&user, 2026).map_err(demo_error)?;
    println!(
        "2026 rollup: revenue {:.2} planned / {:.2} real, net profit {:.2} real",
        plan.total_revenue.planned, plan.total_revenue.real, plan.net_profit.real
    );

    println!();
    println!("== People ==");
    let ana = services
        .people
        .add_employee(
            &user,
            &Employee {
                name: "Ana".to_string(),
                role: "Operations lead".to_string(),
                email: String::new(),
                status: EmployeeStatus::Active,
            },
        )
        .map_err(demo_error)?;
    services
        .people
        .record_evaluation(
            &user,
            &ana.id,
            SkillRatings {
                technique: 8.0,
                behavior: 9.0,
                delivery: 7.0,
                deadlines: 8.0,
                innovation: 6.0,
            },
            "Consistent quarter".to_string(),
        )
        .map_err(demo_error)?;
    println!(
        "team health: {:.1} / 10",
        services.people.team_health(&user).map_err(demo_error)?
    );

    println!();
    println!("== Projects ==");
    services
        .projects
        .add_task(
            &user,
            &ProjectTask {
                title: "Document the sales funnel".to_string(),
                responsible: "Ana".to_string(),
                due_date: String::new(),
                status: Lane::Todo,
            },
        )
        .map_err(demo_error)?;

    println!();
    println!("== Overview ==");
    let today = Local::now().date_naive();
    let overview = services
        .dashboard
        .overview(&user, today.year(), today.month())
        .map_err(demo_error)?;
    println!("company phase:   {}", overview.company_phase);
    println!("current revenue: {:.2}", overview.current_revenue);
    println!("team health:     {:.1}", overview.team_health);
    println!(
        "next priority:   {}",
        overview.next_priority.as_deref().unwrap_or("none")
    );

    Ok(())
}

fn demo_error(error: impl std::fmt::Display) -> AppError {
    AppError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        error.to_string(),
    ))
}
