use anyhow::Result;
use circular_lists::{ CircularList, RingError };
use clap::{ Parser, ValueEnum };
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Replays the circular list walkthrough, printing the ring after each step
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Which walkthrough to replay
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Build a ring from these values instead, then drain it from the head
    #[arg(long, num_args = 1.., allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Inserts, searches and every kind of delete
    Walkthrough,
    /// Operations on an empty ring
    Empty,
    /// Rings that shrink to a single node and then to nothing
    Singles,
    All,
}

fn status(list: &CircularList) {
    println!("Is list empty? {}, Size: {}", list.is_empty(), list.len());
}

fn delete_head(list: &mut CircularList) {
    match list.delete_at_head() {
        Ok(elem) => println!("{} deleted from head.", elem),
        Err(RingError::EmptyCollection) => println!("Deletion failed: List is empty."),
    }
}

fn delete_value(list: &mut CircularList, elem: i64) {
    match list.delete_by_value(elem) {
        Some(_) => println!("{} deleted from the list.", elem),
        None if list.is_empty() => println!("Deletion failed: List is empty or value not found."),
        None => println!("Deletion failed: Value {} not found in the list.", elem),
    }
}

fn walkthrough(list: &mut CircularList) {
    status(list);
    println!("{}", list);

    println!("\n--- Inserting elements ---");
    list.insert_at_head(10);
    println!("{}", list);
    list.insert_at_tail(20);
    println!("{}", list);
    list.insert_at_head(5);
    println!("{}", list);
    list.insert_at_tail(30);
    println!("{}", list);
    list.insert_at_head(1);
    println!("{}", list);
    println!("Size: {}", list.len());

    println!("\n--- Searching elements ---");
    for elem in [10, 30, 1, 99] {
        println!("Search for {}: {}", elem, list.search(elem));
    }

    println!("\n--- Deleting elements ---");
    println!("{}", list);
    delete_head(list);
    println!("{}", list);
    for elem in [20, 30, 5, 99, 10] {
        delete_value(list, elem);
        println!("{}", list);
        println!("Size: {}", list.len());
    }
    status(list);
}

fn empty(list: &mut CircularList) {
    println!("\n--- Operations on empty list ---");
    list.clear();
    delete_head(list);
    delete_value(list, 5);
    println!("Search for 5 in empty list: {}", list.search(5));
    println!("{}", list);
}

fn singles(list: &mut CircularList) {
    println!("\n--- Deleting single node list variations ---");
    list.clear();
    list.insert_at_head(77);
    println!("{}", list);
    delete_head(list);
    println!("{}", list);
    status(list);

    list.insert_at_tail(88);
    println!("{}", list);
    delete_value(list, 88);
    println!("{}", list);
    status(list);

    println!("\n--- Deleting head when it's also tail ---");
    list.insert_at_head(100);
    list.insert_at_tail(200);
    println!("{}", list);
    delete_value(list, 100);
    println!("{}", list);
    delete_value(list, 200);
    println!("{}", list);
    status(list);
}

fn drain(values: &[i64]) -> Result<()> {
    let mut list = CircularList::new();
    for &elem in values {
        list.insert_at_tail(elem);
    }
    println!("{}", list);
    status(&list);
    while !list.is_empty() {
        let elem = list.delete_at_head()?;
        println!("{} deleted from head.", elem);
    }
    status(&list);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let fmt_layer = tracing_tree::HierarchicalLayer::default()
        .with_writer(std::io::stderr)
        .with_indent_lines(true)
        .with_targets(true)
        .with_indent_amount(2);
    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry().with(filter_layer).with(fmt_layer).init();

    if !args.values.is_empty() {
        info!(count = args.values.len(), "draining ring built from arguments");
        return drain(&args.values);
    }

    info!(scenario = ?args.scenario, "replaying");
    let mut list = CircularList::new();
    match args.scenario {
        Scenario::Walkthrough => walkthrough(&mut list),
        Scenario::Empty => empty(&mut list),
        Scenario::Singles => singles(&mut list),
        Scenario::All => {
            walkthrough(&mut list);
            empty(&mut list);
            singles(&mut list);
        }
    }
    Ok(())
}
