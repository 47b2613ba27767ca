use quiz_model::{
    config::Config,
    errors::AppResult,
    identity::IdSequence,
    models::{domain::Question, dto::CreateQuestionRequest},
};

fn main() -> AppResult<()> {
    let config = Config::from_env();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_filter))
        .init();

    let ids = IdSequence::starting_at(config.question_id_start);
    let mut question = Question::create_with(
        &ids,
        config.choice_id_start,
        CreateQuestionRequest::new("Capital of France?"),
    )?;

    let paris = question.add_choice("Paris", true)?.id();
    question.add_choice("Lyon", false)?;
    question.add_choice("Nice", false)?;

    let graded = question.correct_selected_choices(&[paris])?;
    log::info!(
        "Question {} graded: fully_correct={} points_earned={}",
        graded.question_id,
        graded.fully_correct,
        graded.points_earned
    );
    match serde_json::to_string_pretty(&graded) {
        Ok(report) => println!("{}", report),
        Err(e) => log::error!("Failed to render grading report: {}", e),
    }

    Ok(())
}
