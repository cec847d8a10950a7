//! CLI entrypoint for catalog-toolbar
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use reqwest::Url;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use toolbar_application::{
    BrowserPort, ConfigResolver, DomPort, PassthroughTranslator, StoreCode, ToolbarPorts, ToolbarWidget,
    Translator, WIDGET_NAMESPACE,
};
use toolbar_domain::{BaseUrl, ControlRole, ElementId, ElementKind, ToolbarOverrides};
use toolbar_infrastructure::{
    CatalogTranslator, ConfigLoader, FrameScroll, HeadlessPage, ReqwestListingFetcher,
    ScopedStoreConfig,
};
use toolbar_presentation::{
    Cli, Command, ConsoleAlert, ConsoleFormatter, OutputFormat, SimulationReport,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting catalog-toolbar");

    match cli.command {
        Command::ConfigSources => {
            ConfigLoader::print_config_sources();
        }
        Command::Reconcile {
            url,
            param,
            value,
            default_value,
            show_async,
        } => {
            let reconciled = BaseUrl::parse(&url).reconcile(&param, &value, &default_value);
            println!("{}", ConsoleFormatter::format_reconciled(&reconciled, show_async));
        }
        Command::Options {
            store,
            overrides,
            output,
        } => {
            let resolver = build_resolver(cli.config.as_ref(), cli.no_config)?;
            let overrides = parse_overrides(overrides.as_deref())?;
            let options = resolver.widget_options(&StoreCode::new(store), &overrides);
            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format_options(&options),
                OutputFormat::Json => ConsoleFormatter::format_options_json(&options),
            };
            println!("{}", rendered);
        }
        Command::Simulate {
            page,
            origin,
            role,
            value,
            root,
            store,
            overrides,
            translations,
            output,
        } => {
            let resolver = build_resolver(cli.config.as_ref(), cli.no_config)?;
            let request = SimulateRequest {
                page,
                origin,
                role: role.parse()?,
                value,
                root,
                store: StoreCode::new(store),
                overrides: parse_overrides(overrides.as_deref())?,
                translations,
            };
            let report = simulate(&resolver, request, output).await?;
            let rendered = match output {
                OutputFormat::Text => ConsoleFormatter::format_simulation(&report),
                OutputFormat::Json => ConsoleFormatter::format_simulation_json(&report),
            };
            println!("{}", rendered);
        }
    }

    Ok(())
}

fn build_resolver(config_path: Option<&PathBuf>, no_config: bool) -> Result<ConfigResolver> {
    let config = if no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(config_path).context("Failed to load configuration")?
    };
    debug!(stores = config.stores.len(), "configuration loaded");
    for path in config.unknown_paths() {
        warn!(%path, "unknown configuration setting ignored");
    }
    Ok(ConfigResolver::new(Arc::new(ScopedStoreConfig::new(config))))
}

fn parse_overrides(json: Option<&str>) -> Result<ToolbarOverrides> {
    match json {
        Some(json) => Ok(ToolbarOverrides::from_json(json)?),
        None => Ok(ToolbarOverrides::default()),
    }
}

struct SimulateRequest {
    page: PathBuf,
    origin: String,
    role: ControlRole,
    value: String,
    root: String,
    store: StoreCode,
    overrides: ToolbarOverrides,
    translations: Option<PathBuf>,
}

async fn simulate(
    resolver: &ConfigResolver,
    request: SimulateRequest,
    output: OutputFormat,
) -> Result<SimulationReport> {
    let origin = Url::parse(&request.origin)
        .with_context(|| format!("Invalid origin URL: {}", request.origin))?;
    let page = Arc::new(HeadlessPage::from_file(&request.page, origin.as_str())?);

    let mut options = resolver.widget_options(&request.store, &request.overrides);
    if options.url.is_empty() {
        options.url = match origin.query() {
            Some(query) => format!("{}?{}", origin.path(), query),
            None => origin.path().to_string(),
        };
    }

    let alert = Arc::new(match output {
        OutputFormat::Text => ConsoleAlert::new(),
        OutputFormat::Json => ConsoleAlert::quiet(),
    });
    let fetcher = ReqwestListingFetcher::new(reqwest::Client::new()).with_origin(origin);
    let ports = ToolbarPorts::new(page.clone(), page.clone(), Arc::new(fetcher), alert.clone())
        .with_scroll(Arc::new(FrameScroll::new(page.clone())))
        .with_loader(page.clone())
        .with_translator(load_translator(request.translations.as_deref())?);

    let root = page.first(&request.root)?;
    let widget = ToolbarWidget::attach(root, options.clone(), ports);
    info!(bindings = widget.bindings().count(), "toolbar widget attached");

    let control = pick_control(&page, root, &options.selectors, request.role, &request.value)?;
    let mut event = page
        .trigger(control, WIDGET_NAMESPACE)
        .with_context(|| format!("{} control {} is not bound", request.role, control))?;
    let outcome = widget
        .handle(&mut event)
        .await
        .context("Widget ignored the interaction")?;
    widget.dispose();

    Ok(SimulationReport {
        outcome,
        address: page.current_url(),
        content: page.region_html(&options.selectors.content_container),
        sidebar: page.region_html(&options.selectors.sidebar_container),
        scroll_top: page.scroll_top(),
        alerts: alert.shown(),
    })
}

fn load_translator(path: Option<&Path>) -> Result<Arc<dyn Translator>> {
    match path {
        Some(path) => Ok(Arc::new(CatalogTranslator::from_file(path)?)),
        None => Ok(Arc::new(PassthroughTranslator)),
    }
}

/// The control for `role` that offers `value`: a selection list with that
/// option (now chosen), or a link carrying it as `data-value`.
fn pick_control(
    page: &HeadlessPage,
    root: ElementId,
    selectors: &toolbar_domain::ControlSelectors,
    role: ControlRole,
    value: &str,
) -> Result<ElementId> {
    for element in page.find(root, selectors.for_role(role))? {
        match page.element_kind(element) {
            ElementKind::SelectList => {
                if page.choose(element, value).is_ok() {
                    return Ok(element);
                }
            }
            ElementKind::Clickable => {
                if page.data_value(element).as_deref() == Some(value) {
                    return Ok(element);
                }
            }
        }
    }
    bail!("No {} control offers '{}'", role, value)
}
