use anyhow::{anyhow, Result};
use chrono::Local;
use clap::Parser;
use log::{error, info};
use shared::{DashboardSnapshot, Sale, SaleStatus};
use std::path::PathBuf;

use sales_dashboard::config::{self, AddSaleArgs, CliArgs, Command};
use sales_dashboard::domain::display::{bar, format_robux, format_usd};
use sales_dashboard::domain::models::product::NewProduct;
use sales_dashboard::domain::models::sale::demo_sales;
use sales_dashboard::domain::models::settings::ACCENT_PRESETS;
use sales_dashboard::domain::{filter_history, LocalCalendar, SeriesOptions, SystemCalendar};
use sales_dashboard::Backend;

fn main() {
    env_logger::init();

    if let Err(e) = run(CliArgs::parse()) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> Result<()> {
    let backend = Backend::new(config::data_dir_for(&args)?)?;
    let calendar = SystemCalendar::new();

    match args.selected_command() {
        Command::Summary { range } => {
            let sales = backend.sale_service.list_sales()?;
            let products = backend.product_service.list_products()?;
            let snapshot = backend.dashboard_service.snapshot(
                &sales,
                &products,
                &calendar,
                range,
                SeriesOptions::default(),
            );
            print_summary(&snapshot);
        }
        Command::History(history) => {
            let sales = backend.sale_service.list_sales()?;
            let shown = filter_history(&sales, &history.filter());
            for sale in &shown {
                print_sale(sale, &calendar);
            }
            println!("{} of {} sales", shown.len(), sales.len());
        }
        Command::Add(add) => {
            let sale = add_sale(&backend, add)?;
            println!("Recorded sale {}", sale.id);
            print_sale(&sale, &calendar);
        }
        Command::Toggle { id } => {
            let sale = backend.sale_service.toggle_status(id)?;
            println!("Sale {} is now {}", sale.id, sale.status);
        }
        Command::Delete { id } => {
            if backend.sale_service.delete_sale(id)? {
                println!("Deleted sale {}", id);
            } else {
                println!("No sale with id {}", id);
            }
        }
        Command::Products => {
            for product in backend.product_service.list_products()? {
                println!(
                    "{:<16} {:>10} {:>12}  cost {}",
                    product.name,
                    format_usd(product.price),
                    format_robux(product.robux),
                    format_usd(product.cost)
                );
            }
        }
        Command::ProductAdd { name, price, robux, cost } => {
            let product = backend.product_service.add_product(NewProduct {
                name,
                price,
                robux,
                cost,
            })?;
            println!("Added product {}", product.name);
        }
        Command::ProductRemove { name } => {
            backend.product_service.remove_product(&name)?;
            println!("Removed product {}", name);
        }
        Command::Settings => {
            let settings = backend.settings_service.get_settings()?;
            println!("Accent color: {}", settings.accent);
            println!("Robux color:  {}", settings.robux_color);
            println!();
            println!("Accent presets");
            for (name, hex) in ACCENT_PRESETS {
                let marker = if *hex == settings.accent { "*" } else { " " };
                println!("  {} {:<8} {}", marker, name, hex);
            }
        }
        Command::Accent { color } => {
            let color = ACCENT_PRESETS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&color))
                .map(|(_, hex)| hex.to_string())
                .unwrap_or(color);
            let settings = backend.settings_service.set_accent(&color)?;
            println!("Accent color: {}", settings.accent);
        }
        Command::RobuxColor { color } => {
            let settings = backend.settings_service.set_robux_color(&color)?;
            println!("Robux color: {}", settings.robux_color);
        }
        Command::Export { directory } => {
            let sales = backend.sale_service.list_sales()?;
            let directory = directory.unwrap_or_else(|| PathBuf::from("."));
            let result = backend
                .export_service
                .export_to_dir(&directory, &sales, &calendar)?;
            println!("Exported {} sales to {}", result.row_count, result.path.display());
        }
        Command::SeedDemo => {
            let sales = demo_sales();
            backend.sale_service.replace_sales(&sales)?;
            info!("Seeded {} demo sales", sales.len());
            println!("Loaded {} demo sales", sales.len());
        }
    }

    Ok(())
}

fn add_sale(backend: &Backend, add: AddSaleArgs) -> Result<Sale> {
    let product_name = match add.product {
        Some(name) => name,
        None => backend
            .product_service
            .list_products()?
            .into_iter()
            .next()
            .map(|p| p.name)
            .ok_or_else(|| anyhow!("The product catalog is empty"))?,
    };

    let mut form = backend
        .product_service
        .sale_template(&product_name, &add.client)?
        .ok_or_else(|| anyhow!("Unknown product: {}", product_name))?;

    if let Some(amount) = add.amount {
        form.amount = amount;
    }
    if let Some(robux) = add.robux {
        form.robux = robux;
    }
    form.notes = add.notes;
    if add.pending {
        form.status = SaleStatus::Pending;
    }

    backend.sale_service.add_sale(form, Local::now().fixed_offset())
}

fn print_sale(sale: &Sale, calendar: &SystemCalendar) {
    println!(
        "{:>14}  {:<10}  {:<16} {:<12} {:>10} {:>12}  {:<9} {}",
        sale.id,
        calendar.format_short_date(calendar.local_date(&sale.date)),
        sale.client,
        sale.product,
        format_usd(sale.amount),
        format_robux(sale.robux),
        sale.status,
        sale.notes
    );
}

fn print_summary(snapshot: &DashboardSnapshot) {
    let totals = &snapshot.totals;

    println!(
        "Revenue      {:>12}   {}",
        format_usd(totals.revenue),
        format_robux(totals.robux)
    );
    println!("Cost         {:>12}", format_usd(totals.total_cost));
    println!("Profit       {:>12}", format_usd(totals.profit));
    println!(
        "Sales        {:>12}   avg {}",
        totals.completed_count,
        format_usd(totals.average_sale)
    );
    println!(
        "Today        {:>12}   {} in {} sales",
        format_usd(totals.today_revenue),
        format_robux(totals.today_robux),
        totals.today_count
    );
    println!(
        "Pending      {:>12}   {} sales",
        format_usd(totals.pending_value),
        totals.pending_count
    );
    println!("Streak       {:>12} days", snapshot.streak);

    println!();
    println!("{} revenue", snapshot.range.as_str());
    let peak = snapshot.chart.iter().map(|b| b.revenue).fold(0.0, f64::max);
    for bucket in &snapshot.chart {
        let fraction = if peak > 0.0 {
            bucket.revenue / peak
        } else {
            0.0
        };
        println!(
            "  {:<9} {} {:>10} ({})",
            bucket.label,
            bar(fraction, 20),
            format_usd(bucket.revenue),
            bucket.count
        );
    }

    println!();
    println!("Products");
    for product in &snapshot.products {
        println!(
            "  {:<16} {:>10} {:>12} ({} sales)",
            product.product,
            format_usd(product.revenue),
            format_robux(product.robux),
            product.count
        );
    }

    println!();
    println!("Top clients");
    for client in &snapshot.top_clients {
        println!(
            "  {:<16} {} {:>10}",
            client.client,
            bar(client.fraction, 20),
            format_usd(client.revenue)
        );
    }
}
