use crate::infra::{InMemoryProfileSink, InMemorySessionStore};
use clap::Args;
use coachflow::error::AppError;
use coachflow::flows::assessment::{
    AssessmentService, AssessmentServiceError, CatalogLibrary, CatalogVariant, OwnerId,
    QuestionCatalog, QuestionKind, SessionStatusView,
};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Catalog variant to walk through (quick, moderate, comprehensive)
    #[arg(long, default_value = "quick")]
    pub(crate) variant: String,
    /// Owner identifier recorded on the demo session
    #[arg(long, default_value = "demo-client")]
    pub(crate) owner: String,
    /// Answer with health and allergy detours instead of the default path
    #[arg(long)]
    pub(crate) with_detours: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogInspectArgs {
    /// Catalog variant to print (quick, moderate, comprehensive)
    pub(crate) variant: String,
    /// Include option ids and labels for each select question
    #[arg(long)]
    pub(crate) list_options: bool,
}

pub(crate) fn run_catalog_inspect(args: CatalogInspectArgs) -> Result<(), AppError> {
    let variant = CatalogVariant::parse(&args.variant)?;
    let catalogs = CatalogLibrary::load()?;
    let catalog = catalogs.get(variant);

    println!(
        "{} catalog: {} questions, first question '{}'",
        variant.label(),
        catalog.len(),
        catalog.first_question().key
    );

    render_catalog_table(catalog, args.list_options);
    Ok(())
}

fn render_catalog_table(catalog: &QuestionCatalog, list_options: bool) {
    let mut current_phase = None;
    for key in catalog.keys() {
        let Some(node) = catalog.node(key) else {
            continue;
        };

        if current_phase != Some(node.phase) {
            println!("\n[{}]", node.phase.label());
            current_phase = Some(node.phase);
        }

        let kind = match node.kind {
            QuestionKind::FreeText => "free text",
            QuestionKind::SingleSelect => "single select",
            QuestionKind::MultiSelect => "multi select",
        };
        if node.is_terminal() {
            println!("  {:<24} {kind} (terminal)", node.key);
        } else {
            println!("  {:<24} {kind}", node.key);
        }

        if list_options {
            for option in &node.options {
                println!("      {:>3}  {}", option.id, option.label);
            }
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let variant = CatalogVariant::parse(&args.variant)?;

    let store = Arc::new(InMemorySessionStore::default());
    let profiles = Arc::new(InMemoryProfileSink::default());
    let service = AssessmentService::new(store, profiles.clone())?;

    println!("CoachFlow assessment demo ({} variant)", variant.label());

    let started = match service.start(OwnerId(args.owner.clone()), variant) {
        Ok(started) => started,
        Err(err) => return Err(demo_failure(err)),
    };
    let session_id = started.session.session_id.clone();
    println!(
        "Started session {} for owner '{}'.",
        session_id, args.owner
    );

    // Show the validation gate before walking the happy path.
    println!("\nSubmitting an out-of-range age to demonstrate validation:");
    match service.submit(&session_id, "150") {
        Err(AssessmentServiceError::Rejected { rejection, .. }) => {
            println!("  rejected: {}", rejection.message);
        }
        Ok(_) => println!("  unexpectedly accepted"),
        Err(err) => return Err(demo_failure(err)),
    }

    println!("\nWalking the questionnaire:");
    let mut question = started.question;
    loop {
        let answer = scripted_answer(question.key, args.with_detours);
        let view = match service.submit(&session_id, answer) {
            Ok(view) => view,
            Err(err) => return Err(demo_failure(err)),
        };

        render_step(question.key, answer, &view.session);

        if view.completed {
            break;
        }
        match view.question {
            Some(next) => question = next,
            None => break,
        }
    }

    let status = match service.status(&session_id) {
        Ok(status) => status,
        Err(err) => return Err(demo_failure(err)),
    };
    println!(
        "\nSession {} finished: {} answers recorded, {}% complete.",
        status.session_id,
        status.answered,
        status.percent_complete
    );

    for profile in profiles.profiles() {
        println!("\nFinalized profile ({} responses):", profile.responses.len());
        for (key, value) in profile.responses.iter() {
            println!("  {:<24} {}", key, value.joined());
        }
    }

    Ok(())
}

fn render_step(key: &str, answer: &str, session: &SessionStatusView) {
    println!(
        "  {:<24} -> '{}' [{} {}%]",
        key, answer, session.phase_label, session.percent_complete
    );
}

/// Scripted answers keyed by question. The detour script selects a health
/// condition, the "Other" allergy, and both recovery needs so every
/// conditional edge in the quick table is exercised.
fn scripted_answer(key: &str, with_detours: bool) -> &'static str {
    if with_detours {
        match key {
            "health_conditions" => return "1, 4",
            "allergies" => return "2, 13",
            "allergy_details" => return "raw mango",
            "recovery_needs" => return "14, 15",
            "organ_recovery_notes" => return "kidney donor, recovering since March",
            "post_surgery_notes" => return "surgery six weeks ago",
            _ => {}
        }
    }

    match key {
        "age" => "34",
        "height" => "171",
        "weight" => "74",
        "sleep_hours" => "7",
        "target_weight" => "68",
        "health_conditions" | "recovery_needs" => "16",
        "food_dislikes" => "bitter gourd",
        "plan_notes" => "prefer home cooked meals",
        "medication_details" => "multivitamin daily",
        "exercise_history" => "gym twice a week until last year",
        "allergy_details" => "raw mango",
        "organ_recovery_notes" => "none",
        "post_surgery_notes" => "none",
        _ => "2",
    }
}

fn demo_failure(err: AssessmentServiceError) -> AppError {
    match err {
        AssessmentServiceError::Configuration(inner) => AppError::Catalog(inner),
        other => AppError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            other.to_string(),
        )),
    }
}
