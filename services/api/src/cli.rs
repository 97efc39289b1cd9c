use crate::assessment::{run_questions, run_score, QuestionsArgs, ScoreArgs};
use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use esgen::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ESGEN",
    about = "Run the ESG assessment service or score questionnaires from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect question catalogs and score answer files
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
    /// Walk a scripted questionnaire through scoring and the report lifecycle
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Print the fixed flow or a random draw from the question bank
    Questions(QuestionsArgs),
    /// Score a JSON answers file and print the dashboard summary
    Score(ScoreArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assessment {
            command: AssessmentCommand::Questions(args),
        } => run_questions(args),
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["esgen"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_subcommand_takes_an_answers_file() {
        let cli = Cli::try_parse_from([
            "esgen",
            "assessment",
            "score",
            "--answers",
            "answers.json",
            "--as-of",
            "2025-06-30",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Assessment {
                command: AssessmentCommand::Score(args),
            }) => {
                assert_eq!(args.answers.to_str(), Some("answers.json"));
                assert!(args.as_of.is_some());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn random_questions_accept_counts() {
        let cli = Cli::try_parse_from([
            "esgen",
            "assessment",
            "questions",
            "--random",
            "--environmental",
            "2",
            "--seed",
            "9",
        ])
        .expect("parses");
        assert!(matches!(
            cli.command,
            Some(Command::Assessment {
                command: AssessmentCommand::Questions(QuestionsArgs {
                    random: true,
                    environmental: Some(2),
                    seed: Some(9),
                    ..
                })
            })
        ));
    }
}
