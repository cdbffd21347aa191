use crate::console::{run_catalog, run_recommend, CatalogArgs, RecommendArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use course_advisor::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Course Advisor",
    about = "Recommend courses, platforms and certification options from the command line or over HTTP",
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
    /// Print a ranked course short-list for one learner
    Recommend(RecommendArgs),
    /// List every course in the built-in catalog
    Catalog(CatalogArgs),
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
        Command::Recommend(args) => run_recommend(args),
        Command::Catalog(args) => run_catalog(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use course_advisor::recommend::{
        CertificateRequirement, Interest, PaymentPreference, StudyYear,
    };

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn recommend_parses_form_labels() {
        let cli = Cli::try_parse_from([
            "course-advisor",
            "recommend",
            "--year",
            "1st Year",
            "--interest",
            "Programming",
            "--skills",
            "python programming basics",
            "--payment",
            "Free",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Recommend(args)) => {
                assert_eq!(args.year, StudyYear::Year1);
                assert_eq!(args.interest, Interest::Programming);
                assert_eq!(args.certificate, CertificateRequirement::Any);
                assert_eq!(args.payment, PaymentPreference::Free);
                assert!(!args.json);
            }
            other => panic!("expected recommend command, got {other:?}"),
        }
    }

    #[test]
    fn recommend_rejects_unknown_interest() {
        let result = Cli::try_parse_from([
            "course-advisor",
            "recommend",
            "--year",
            "2",
            "--interest",
            "Gardening",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["course-advisor"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
