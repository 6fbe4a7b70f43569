mod config;

use std::fs::File;
use std::sync::{Arc, Mutex};

use disclosure::prelude::*;
use log::info;
use markup::render_html_with;
use simplelog::{Config, WriteLogger};
use thiserror::Error;

use config::DemoConfig;

#[derive(Debug, Error)]
enum DemoError {
    #[error("failed to create log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

fn main() {
    let config = DemoConfig::from_env();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    let log_file = File::create(&config.log_file)?;
    WriteLogger::init(config.log_level, Config::default(), log_file)?;
    info!("disclosure demo starting with {:?}", config);

    let ids = SequentialIds::new();
    let renderer = Renderer::new();

    uncontrolled(config, &ids, &renderer)?;
    controlled(config, &ids, &renderer)?;
    render_prop(config, &ids, &renderer)?;
    orphan(&renderer);

    Ok(())
}

/// Print the current tree and return it for lookups.
fn show(
    config: &DemoConfig,
    renderer: &Renderer,
    title: &str,
    node: &Node,
) -> Result<Element, DemoError> {
    let root = renderer.render_in(Element::div().attr("class", "demo"), node)?;
    println!("-- {title}");
    println!("{}\n", render_html_with(&root, &config.render_config()));
    Ok(root)
}

fn click_button(renderer: &Renderer, root: &Element) {
    if let Some(button) = markup::find_by_attr(root, "data-disclosure-button") {
        renderer.click(&button.key);
    }
}

fn uncontrolled(
    config: &DemoConfig,
    ids: &SequentialIds,
    renderer: &Renderer,
) -> Result<(), DemoError> {
    let props = || {
        DisclosureProps::new()
            .on_change(|| info!("uncontrolled disclosure changed"))
            .children(vec![
                DisclosureButton::new().label("What is a disclosure?").into(),
                DisclosurePanel::new()
                    .child("A button that shows and hides a panel.")
                    .into(),
            ])
    };
    let disclosure = Disclosure::mount(&props(), ids);

    let root = show(config, renderer, "uncontrolled, initial", &disclosure.view(props()))?;
    click_button(renderer, &root);
    if disclosure.needs_render() {
        show(config, renderer, "uncontrolled, after click", &disclosure.view(props()))?;
    }
    Ok(())
}

fn controlled(
    config: &DemoConfig,
    ids: &SequentialIds,
    renderer: &Renderer,
) -> Result<(), DemoError> {
    let open = Arc::new(Mutex::new(true));
    let props = {
        let open = Arc::clone(&open);
        move || {
            let current = open.lock().map(|o| *o).unwrap_or(false);
            let open = Arc::clone(&open);
            DisclosureProps::new()
                .id("shipping")
                .open(current)
                .on_change(move || {
                    if let Ok(mut open) = open.lock() {
                        *open = !*open;
                        info!("caller set open to {}", *open);
                    }
                })
                .children(vec![
                    DisclosureButton::new()
                        .label("Shipping")
                        .attr("class", "toggle")
                        .on_click(|_| info!("caller on_click"))
                        .into(),
                    DisclosurePanel::new().child("Ships in 2 days.").into(),
                ])
        }
    };
    let disclosure = Disclosure::mount(&props(), ids);

    let root = show(config, renderer, "controlled, initial", &disclosure.view(props()))?;
    click_button(renderer, &root);
    show(config, renderer, "controlled, after click", &disclosure.view(props()))?;
    Ok(())
}

fn render_prop(
    config: &DemoConfig,
    ids: &SequentialIds,
    renderer: &Renderer,
) -> Result<(), DemoError> {
    let props = || {
        DisclosureProps::new().render_prop(|cx| {
            let label = if cx.is_open { "Hide notes" } else { "Show notes" };
            vec![
                DisclosureButton::new().label(label).into(),
                DisclosurePanel::new()
                    .child(format!("Panel {} is {}", cx.panel_id, cx.data_state()))
                    .into(),
            ]
        })
    };
    let disclosure = Disclosure::mount(&props(), ids);

    let root = show(config, renderer, "render prop, initial", &disclosure.view(props()))?;
    click_button(renderer, &root);
    if disclosure.needs_render() {
        show(config, renderer, "render prop, after click", &disclosure.view(props()))?;
    }
    Ok(())
}

/// A button with no enclosing disclosure fails to render.
fn orphan(renderer: &Renderer) {
    let node = Node::from(DisclosureButton::new().label("Orphan"));
    match renderer.render(&node) {
        Ok(_) => println!("-- orphan button rendered unexpectedly"),
        Err(e) => println!("-- orphan button: {e}"),
    }
}
