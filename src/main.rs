use std::path::{Path, PathBuf};

use anyhow::anyhow;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use url::Url;

use course_browser::config::{consts, Config};
use course_browser::core::catalog_client::CatalogClient;
use course_browser::core::command::{Command, HELP};
use course_browser::core::controller::{Controller, Dispatch};
use course_browser::core::loader;
use course_browser::core::options::{OptionField, OptionsScope};
use course_browser::core::page::PageBindings;
use course_browser::core::scrape::{save_courses, scrape_all_pages};
use course_browser::core::view::{compute_view, AppState, ViewModel};
use course_browser::model::criteria::{CrossRegisterFilter, Criteria, InstructorMatch, SearchScope, StemFilter};
use course_browser::render::html::render_page;
use course_browser::render::text::{render_option_list, render_text};
use course_browser::utils::input::input_trim_async;

#[derive(Parser)]
#[command(name = "course_browser")]
#[command(about = "Browse and filter a course catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the catalog interactively, re-rendering the page after every change
    Browse {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Apply filters once, print the table and write the page
    Render {
        #[command(flatten)]
        catalog: CatalogArgs,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the options of one dropdown
    Options {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Dropdown to list
        #[arg(value_enum)]
        field: OptionField,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Build the catalog JSON from the public course listing
    Scrape {
        /// Listing URL; pages are requested as `?page=N`
        #[arg(long, default_value = consts::SCRAPE_BASE_URL)]
        base_url: Url,

        /// Number of listing pages
        #[arg(long, default_value_t = consts::SCRAPE_PAGES)]
        pages: u32,

        /// Where to write the JSON
        #[arg(short, long, default_value = consts::SCRAPE_OUTPUT)]
        output: PathBuf,
    },
}

#[derive(Args)]
struct CatalogArgs {
    /// Catalog JSON, as a path or URL
    #[arg(short, long, default_value = consts::DATA_PATH)]
    data: String,

    /// Fetch a relative --data path from this URL instead of disk
    #[arg(long)]
    base_url: Option<Url>,

    /// Page template (defaults to the bundled page)
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Rendered page
    #[arg(short, long, default_value = consts::OUTPUT_PATH)]
    output: PathBuf,

    /// Derive dropdowns from the full catalog or the filtered rows
    #[arg(long, value_enum, default_value_t = OptionsScope::Full)]
    options_scope: OptionsScope,

    /// Fields searched by free text
    #[arg(long, value_enum, default_value_t = SearchScope::NumberAndTitle)]
    search_scope: SearchScope,

    /// How a selected instructor is matched
    #[arg(long, value_enum, default_value_t = InstructorMatch::Exact)]
    instructor_match: InstructorMatch,
}

impl From<CatalogArgs> for Config {
    fn from(args: CatalogArgs) -> Self {
        Config {
            data: args.data,
            base_url: args.base_url,
            template: args.template,
            output: args.output,
            options_scope: args.options_scope,
            search_scope: args.search_scope,
            instructor_match: args.instructor_match,
        }
    }
}

#[derive(Args)]
struct FilterArgs {
    /// Free-text search
    #[arg(long, default_value = "")]
    search: String,

    #[arg(long)]
    topic: Option<String>,

    #[arg(long)]
    semester: Option<String>,

    #[arg(long)]
    instructor: Option<String>,

    #[arg(long, value_enum)]
    stem: Option<StemFilter>,

    #[arg(long, value_enum, default_value_t = CrossRegisterFilter::Any)]
    cross: CrossRegisterFilter,
}

impl FilterArgs {
    fn criteria(self, config: &Config) -> Criteria {
        Criteria {
            search_text: self.search,
            selected_topic: self.topic,
            selected_semester: self.semester,
            selected_instructor: self.instructor,
            stem_filter: self.stem,
            cross_register: self.cross,
            search_scope: config.search_scope,
            instructor_match: config.instructor_match,
        }
    }
}

fn init_logging() {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("html5ever", log::LevelFilter::Warn)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let client = CatalogClient::new().map_err(|e| anyhow!("{}", e))?;

    match cli.command {
        Commands::Browse { catalog } => browse(&client, catalog.into()).await,
        Commands::Render { catalog, filters } => {
            let config: Config = catalog.into();
            let state = load_state(&client, &config).await?;
            let view = compute_view(&state, &filters.criteria(&config), config.options_scope);
            print!("{}", render_text(&view.table));
            write_page(&config, &config.load_template().await, &view).await
        }
        Commands::Options { catalog, field, filters } => {
            let config: Config = catalog.into();
            let state = load_state(&client, &config).await?;
            let view = compute_view(&state, &filters.criteria(&config), config.options_scope);
            let dropdown = match field {
                OptionField::Instructor => &view.instructors,
                OptionField::Topic => &view.topics,
                OptionField::Semester => &view.semesters,
            };
            print!("{}", render_option_list(dropdown));
            Ok(())
        }
        Commands::Scrape { base_url, pages, output } => {
            let courses = scrape_all_pages(&client, &base_url, pages).await;
            if courses.is_empty() {
                log::warn!("No courses scraped, {} not written", output.display());
                return Ok(());
            }
            save_courses(&output, &courses).await.map_err(|e| anyhow!("{}", e))
        }
    }
}

async fn load_state(client: &CatalogClient, config: &Config) -> anyhow::Result<AppState> {
    let source = config.data_source().map_err(|e| anyhow!("{}", e))?;
    Ok(AppState::new(loader::load(client, &source).await))
}

async fn write_page(config: &Config, template: &str, view: &ViewModel) -> anyhow::Result<()> {
    let page = render_page(template, view, Local::now());
    write_file(&config.output, &page).await?;
    log::info!("Wrote {} ({} of {} courses)", config.output.display(), view.shown, view.total);
    Ok(())
}

async fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

async fn browse(client: &CatalogClient, config: Config) -> anyhow::Result<()> {
    let template = config.load_template().await;
    let bindings = PageBindings::detect(&template);
    let state = load_state(client, &config).await?;
    let criteria = Criteria {
        search_scope: config.search_scope,
        instructor_match: config.instructor_match,
        ..Default::default()
    };
    let mut controller = Controller::new(state, criteria, config.options_scope, bindings);

    print!("{}", render_text(&controller.view().table));
    write_page(&config, &template, controller.view()).await?;
    println!("Type `help` for commands.");

    while let Some(line) = input_trim_async(consts::PROMPT).await? {
        if line.is_empty() {
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{}", err.message);
                continue;
            }
        };

        match controller.dispatch(command) {
            Dispatch::Rendered(view) => {
                print!("{}", render_text(&view.table));
                if view.criteria.is_unset() {
                    println!("(all {} courses)", view.total);
                } else {
                    println!("({} of {} courses)", view.shown, view.total);
                }
                write_page(&config, &template, view).await?;
            }
            Dispatch::Show(view) => print!("{}", render_text(&view.table)),
            Dispatch::Options(dropdown) => print!("{}", render_option_list(dropdown)),
            Dispatch::Write(view) => write_page(&config, &template, view).await?,
            Dispatch::Help => println!("{}", HELP),
            Dispatch::Quit => break,
            Dispatch::Ignored => println!("That control is not on the page."),
        }
    }
    Ok(())
}
