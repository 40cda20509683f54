use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use time::Date;
use time::macros::format_description;

use yogabook::flows::account;
use yogabook::flows::auth;
use yogabook::flows::detail::SessionDetail;
use yogabook::flows::form::{SessionDraft, SessionForm, today};
use yogabook::flows::Notifier;
use yogabook::guards::{AuthGuard, Navigator, RouteGuard, UnauthGuard};
use yogabook::net::Services;
use yogabook::net::client::ApiClient;
use yogabook::net::types::{LoginRequest, RegisterRequest};
use yogabook::{ApiError, ClientConfig, SessionStore, routes};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing {0}; pass --{0} or set YOGA_{1}")]
    MissingCredential(&'static str, &'static str),
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("redirected to `{0}`")]
    Redirected(String),
}

#[derive(Parser, Debug)]
#[command(name = "yoga-cli", about = "Yoga studio booking API CLI")]
struct Cli {
    #[arg(long, env = "YOGA_API_URL", default_value = yogabook::config::DEFAULT_BASE_URL)]
    base_url: String,

    #[arg(long, env = "YOGA_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "YOGA_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account, then stop (no session is opened).
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    Me(MeCommand),
    Session(SessionCommand),
    Teacher(TeacherCommand),
}

#[derive(Args, Debug)]
struct MeCommand {
    #[command(subcommand)]
    command: MeSubcommand,
}

#[derive(Subcommand, Debug)]
enum MeSubcommand {
    Show,
    Delete,
}

#[derive(Args, Debug)]
struct SessionCommand {
    #[command(subcommand)]
    command: SessionSubcommand,
}

#[derive(Subcommand, Debug)]
enum SessionSubcommand {
    List,
    Show {
        session_id: u64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, value_parser = parse_date, help = "YYYY-MM-DD, defaults to today")]
        date: Option<Date>,
        #[arg(long)]
        teacher_id: u64,
    },
    Update {
        session_id: u64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_date)]
        date: Option<Date>,
        #[arg(long)]
        teacher_id: Option<u64>,
    },
    Delete {
        session_id: u64,
    },
    Join {
        session_id: u64,
    },
    Leave {
        session_id: u64,
    },
}

#[derive(Args, Debug)]
struct TeacherCommand {
    #[command(subcommand)]
    command: TeacherSubcommand,
}

#[derive(Subcommand, Debug)]
enum TeacherSubcommand {
    List,
    Show { teacher_id: u64 },
}

/// Navigation target for a terminal: routes are only reported.
#[derive(Debug, Default)]
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        tracing::info!(route, "navigate");
    }
}

#[derive(Debug, Default)]
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{message}");
    }
}

struct CliContext {
    store: SessionStore,
    services: Services,
    email: Option<String>,
    password: Option<String>,
}

impl CliContext {
    fn credentials(&self) -> Result<(String, String), CliError> {
        let email = self.email.clone().ok_or(CliError::MissingCredential("email", "EMAIL"))?;
        let password = self
            .password
            .clone()
            .ok_or(CliError::MissingCredential("password", "PASSWORD"))?;
        Ok((email, password))
    }

    /// Log in (through the login page's guard) and check the protected-route
    /// guard before running an authenticated command.
    async fn authenticate(&self) -> Result<(), CliError> {
        if UnauthGuard::new(self.store.clone(), TerminalNavigator).can_activate() {
            let (email, password) = self.credentials()?;
            auth::login(
                &self.services.auth,
                &self.store,
                TerminalNavigator,
                &LoginRequest { email, password },
            )
            .await?;
        }
        if !AuthGuard::new(self.store.clone(), TerminalNavigator).can_activate() {
            return Err(CliError::Redirected(routes::LOGIN.to_owned()));
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SessionStore::new();
    let client = ApiClient::new(ClientConfig::new(cli.base_url), store.clone());
    let ctx = CliContext { services: Services::new(client), store, email: cli.email, password: cli.password };

    match cli.command {
        Command::Register { first_name, last_name } => run_register(&ctx, first_name, last_name).await,
        Command::Me(me) => {
            ctx.authenticate().await?;
            run_me(&ctx, me).await
        }
        Command::Session(session) => {
            ctx.authenticate().await?;
            run_session(&ctx, session).await
        }
        Command::Teacher(teacher) => {
            ctx.authenticate().await?;
            run_teacher(&ctx, teacher).await
        }
    }
}

async fn run_register(ctx: &CliContext, first_name: String, last_name: String) -> Result<(), CliError> {
    let (email, password) = ctx.credentials()?;
    let request = RegisterRequest { email, first_name, last_name, password };
    auth::register(&ctx.services.auth, TerminalNavigator, &request).await?;
    print_json(&json!({ "registered": request.email }))
}

async fn run_me(ctx: &CliContext, me: MeCommand) -> Result<(), CliError> {
    match me.command {
        MeSubcommand::Show => {
            let user = account::current_user(&ctx.services.users, &ctx.store).await?;
            print_json(&user)
        }
        MeSubcommand::Delete => {
            account::delete_account(&ctx.services.users, &ctx.store, TerminalNavigator, StderrNotifier).await?;
            Ok(())
        }
    }
}

async fn run_session(ctx: &CliContext, session: SessionCommand) -> Result<(), CliError> {
    match session.command {
        SessionSubcommand::List => print_json(&ctx.services.sessions.all().await?),
        SessionSubcommand::Show { session_id } => {
            let detail = SessionDetail::load(&ctx.services, &ctx.store, session_id).await?;
            print_detail(&detail)
        }
        SessionSubcommand::Create { name, description, date, teacher_id } => {
            let form = open_form(ctx, routes::SESSION_CREATE).await?;
            let draft = SessionDraft { name, description, date: date.unwrap_or_else(today), teacher_id };
            let saved = form.submit(&draft, TerminalNavigator, StderrNotifier).await?;
            print_json(&saved)
        }
        SessionSubcommand::Update { session_id, name, description, date, teacher_id } => {
            let form = open_form(ctx, &routes::session_update(session_id)).await?;
            let Some(mut draft) = form.draft().cloned() else {
                return Err(CliError::Redirected(routes::SESSIONS_PAGE.to_owned()));
            };
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            if let Some(date) = date {
                draft.date = date;
            }
            if let Some(teacher_id) = teacher_id {
                draft.teacher_id = teacher_id;
            }
            let saved = form.submit(&draft, TerminalNavigator, StderrNotifier).await?;
            print_json(&saved)
        }
        SessionSubcommand::Delete { session_id } => {
            let detail = SessionDetail::load(&ctx.services, &ctx.store, session_id).await?;
            if !detail.is_admin {
                return Err(CliError::Redirected(routes::SESSIONS_PAGE.to_owned()));
            }
            detail.delete(TerminalNavigator, StderrNotifier).await?;
            Ok(())
        }
        SessionSubcommand::Join { session_id } => {
            let mut detail = SessionDetail::load(&ctx.services, &ctx.store, session_id).await?;
            detail.participate().await?;
            print_detail(&detail)
        }
        SessionSubcommand::Leave { session_id } => {
            let mut detail = SessionDetail::load(&ctx.services, &ctx.store, session_id).await?;
            detail.un_participate().await?;
            print_detail(&detail)
        }
    }
}

async fn run_teacher(ctx: &CliContext, teacher: TeacherCommand) -> Result<(), CliError> {
    match teacher.command {
        TeacherSubcommand::List => print_json(&ctx.services.teachers.all().await?),
        TeacherSubcommand::Show { teacher_id } => print_json(&ctx.services.teachers.detail(teacher_id).await?),
    }
}

async fn open_form(ctx: &CliContext, url: &str) -> Result<SessionForm, CliError> {
    SessionForm::open(&ctx.services, &ctx.store, TerminalNavigator, url)
        .await?
        .ok_or_else(|| CliError::Redirected(routes::SESSIONS_PAGE.to_owned()))
}

fn print_detail(detail: &SessionDetail) -> Result<(), CliError> {
    print_json(&json!({
        "session": detail.session,
        "teacher": detail.teacher,
        "isParticipate": detail.is_participate,
        "isAdmin": detail.is_admin,
    }))
}

fn print_json(value: &impl Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn parse_date(raw: &str) -> Result<Date, time::error::Parse> {
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
}
