// src/main.rs
// moviedb command-line interface

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use moviedb::application::commands;
use moviedb::application::{CreateMovieDto, CreatePersonDto, ToErrorResponse, UpdateMovieDto, UpdatePersonDto};
use moviedb::{AppResult, Catalog, CatalogConfig, PersonKind, StorageBackend};

#[derive(Debug, Parser)]
#[command(name = "moviedb", version, about = "Constraint-checked movie and person catalog")]
struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Override storage.backend
    #[arg(long, global = true, value_enum)]
    backend: Option<BackendArg>,

    /// Override storage.data_dir
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Replace all data with the demo data set
    Seed,
    /// Delete all data
    Clear,
    /// Record counts per table
    Stats,
    /// People, actors and directors
    People {
        #[command(subcommand)]
        action: PeopleAction,
    },
    /// Movies
    Movies {
        #[command(subcommand)]
        action: MovieAction,
    },
}

#[derive(Debug, Subcommand)]
enum PeopleAction {
    /// List people, optionally restricted to one role
    List {
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
    },
    /// Show a person with the movies they directed and played in
    Show { id: String },
    Add {
        #[arg(long, value_enum, default_value = "person")]
        role: RoleArg,
        id: String,
        name: String,
        #[arg(long)]
        agent: Option<String>,
    },
    Update {
        #[arg(long, value_enum, default_value = "person")]
        role: RoleArg,
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        agent: Option<String>,
        #[arg(long, conflicts_with = "agent")]
        clear_agent: bool,
    },
    Delete {
        #[arg(long, value_enum, default_value = "person")]
        role: RoleArg,
        id: String,
    },
}

#[derive(Debug, Subcommand)]
enum MovieAction {
    List,
    Show { id: String },
    Add(AddMovieArgs),
    Update(UpdateMovieArgs),
    Delete { id: String },
}

#[derive(Debug, Args)]
struct AddMovieArgs {
    id: String,
    title: String,
    /// YYYY-MM-DD
    release_date: String,
    #[arg(long)]
    director: String,
    #[arg(long = "actor")]
    actors: Vec<String>,
    /// Category code (1 = TV series episode, 2 = biography) or name
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    tv_series_name: Option<String>,
    #[arg(long)]
    episode_no: Option<String>,
    #[arg(long)]
    about: Option<String>,
}

#[derive(Debug, Args)]
struct UpdateMovieArgs {
    id: String,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    release_date: Option<String>,
    #[arg(long)]
    director: Option<String>,
    #[arg(long = "add-actor")]
    add_actors: Vec<String>,
    #[arg(long = "remove-actor")]
    remove_actors: Vec<String>,
    /// Pass an empty value to request removing the category
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    tv_series_name: Option<String>,
    #[arg(long)]
    episode_no: Option<String>,
    #[arg(long)]
    about: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RoleArg {
    Person,
    Actor,
    Director,
}

impl From<RoleArg> for PersonKind {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Person => PersonKind::Person,
            RoleArg::Actor => PersonKind::Actor,
            RoleArg::Director => PersonKind::Director,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    Memory,
    File,
    Sqlite,
}

impl From<BackendArg> for StorageBackend {
    fn from(backend: BackendArg) -> Self {
        match backend {
            BackendArg::Memory => StorageBackend::Memory,
            BackendArg::File => StorageBackend::File,
            BackendArg::Sqlite => StorageBackend::Sqlite,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("moviedb error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = CatalogConfig::load().context("failed to load configuration")?;
    if let Some(backend) = cli.backend {
        config.storage.backend = backend.into();
    }
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = Some(data_dir);
    }

    let mut catalog = Catalog::open(&config).context("failed to open the catalog")?;

    match dispatch(cli.command, &mut catalog).to_error_response() {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(response) => {
            println!("{response}");
            std::process::exit(2);
        }
    }
}

fn dispatch(command: Commands, catalog: &mut Catalog) -> AppResult<String> {
    match command {
        Commands::Seed => render(&commands::seed(catalog)?),
        Commands::Clear => render(&commands::clear(catalog)?),
        Commands::Stats => render(&commands::stats(catalog)),
        Commands::People { action } => dispatch_people(action, catalog),
        Commands::Movies { action } => dispatch_movies(action, catalog),
    }
}

fn dispatch_people(action: PeopleAction, catalog: &mut Catalog) -> AppResult<String> {
    match action {
        PeopleAction::List { role } => render(&commands::list_people(catalog, role.map(Into::into))),
        PeopleAction::Show { id } => render(&commands::get_person(catalog, &id)?),
        PeopleAction::Add {
            role,
            id,
            name,
            agent,
        } => {
            let dto = CreatePersonDto {
                role: role.into(),
                person_id: id,
                name,
                agent,
            };
            render(&commands::create_person(catalog, dto)?)
        }
        PeopleAction::Update {
            role,
            id,
            name,
            agent,
            clear_agent,
        } => {
            let dto = UpdatePersonDto {
                role: role.into(),
                person_id: id,
                name,
                agent,
                clear_agent,
            };
            render(&commands::update_person(catalog, dto)?)
        }
        PeopleAction::Delete { role, id } => {
            commands::delete_person(catalog, role.into(), &id)?;
            render(&commands::stats(catalog))
        }
    }
}

fn dispatch_movies(action: MovieAction, catalog: &mut Catalog) -> AppResult<String> {
    match action {
        MovieAction::List => render(&commands::list_movies(catalog)),
        MovieAction::Show { id } => render(&commands::get_movie(catalog, &id)?),
        MovieAction::Add(args) => {
            let dto = CreateMovieDto {
                movie_id: args.id,
                title: args.title,
                release_date: args.release_date,
                director_id: args.director,
                actor_ids: args.actors,
                category: args.category,
                tv_series_name: args.tv_series_name,
                episode_no: args.episode_no,
                about: args.about,
            };
            render(&commands::create_movie(catalog, dto)?)
        }
        MovieAction::Update(args) => {
            let dto = UpdateMovieDto {
                movie_id: args.id,
                title: args.title,
                release_date: args.release_date,
                director_id: args.director,
                add_actor_ids: args.add_actors,
                remove_actor_ids: args.remove_actors,
                category: args.category,
                tv_series_name: args.tv_series_name,
                episode_no: args.episode_no,
                about: args.about,
            };
            render(&commands::update_movie(catalog, dto)?)
        }
        MovieAction::Delete { id } => {
            commands::delete_movie(catalog, &id)?;
            render(&commands::stats(catalog))
        }
    }
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MOVIEDB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
