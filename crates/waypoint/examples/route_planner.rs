//! Waypoint Route Planner Example
//!
//! Drives the route planner page through a scripted session:
//! - Typing into the "From" and "To" pickers and navigating with the keyboard
//! - Closing a dropdown by pressing outside of it
//! - Swapping cities and choosing a priority
//! - Searching the configured route endpoint
//!
//! Run with: cargo run -p waypoint --example route_planner [-- config.toml]
//!
//! Set `RUST_LOG=waypoint=debug` to see the widget and planner logs.

use waypoint::planner::{FocusTarget, SearchState};
use waypoint::prelude::*;

fn print_combo(combo: &ComboBox) {
    let view = combo.view();
    let text = if view.text.is_empty() {
        view.placeholder.unwrap_or_default()
    } else {
        view.text
    };
    println!("  {}: [{}]", view.label, text);
    if let Some(rows) = view.dropdown {
        for row in rows {
            let marker = if row.highlighted { ">" } else { " " };
            println!("    {marker} {}", row.label);
        }
    }
}

fn print_page(planner: &RoutePlanner) {
    print_combo(planner.from_box());
    print_combo(planner.to_box());
    println!("  Priority: {}", planner.priority().label());
    println!("  {}", planner.summary());
}

fn type_text(planner: &mut RoutePlanner, text: &str) {
    for ch in text.chars() {
        planner.key_press(&KeyPressEvent::typed(ch.to_string()));
    }
}

fn press(planner: &mut RoutePlanner, key: Key) {
    planner.key_press(&KeyPressEvent::key(key));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("waypoint=info")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    println!("Route endpoint: {}", config.endpoint);

    let mut planner = RoutePlanner::new(&config)?;
    planner.layout(900.0);

    println!("\nType \"new\" into From:");
    planner.set_focus(Some(FocusTarget::From));
    type_text(&mut planner, "new");
    print_page(&planner);

    println!("\nArrowDown twice, then Enter:");
    press(&mut planner, Key::ArrowDown);
    press(&mut planner, Key::ArrowDown);
    press(&mut planner, Key::Enter);
    print_page(&planner);

    println!("\nTab to To, type \"san\", then press outside:");
    press(&mut planner, Key::Tab);
    type_text(&mut planner, "san");
    print_page(&planner);
    planner.pointer_press(PointerPressEvent::new(
        MouseButton::Left,
        Point::new(5.0, 400.0),
    ));
    print_page(&planner);

    println!("\nPick San Diego with the keyboard:");
    planner.set_focus(Some(FocusTarget::To));
    type_text(&mut planner, " d");
    press(&mut planner, Key::Enter);
    print_page(&planner);

    println!("\nSwap, then choose the cheapest route:");
    let swap = planner.swap_button();
    planner.pointer_press(PointerPressEvent::new(
        MouseButton::Left,
        Point::new(swap.left() + 1.0, swap.top() + 1.0),
    ));
    planner.set_focus(Some(FocusTarget::Priority));
    press(&mut planner, Key::ArrowDown);
    print_page(&planner);

    println!("\nSearching...");
    match planner.search().await {
        SearchState::Found(route) => {
            println!("  Route: {}", route.path.join(" → "));
            println!(
                "  {} legs, {} min, ${:.2}",
                route.legs(),
                route.total_time,
                route.total_cost
            );
        }
        SearchState::Failed(message) => println!("  Search failed: {message}"),
        SearchState::Idle | SearchState::Loading => println!("  No search was run"),
    }

    Ok(())
}
