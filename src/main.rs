use avl_union::avl_tree::{AvlTree, NodeRef};
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger};
use std::env;
use std::fmt::Display;

const INDENTATION: &str = "       ";

fn log_level() -> LevelFilter {
    match env::var("AVL_LOG").as_ref().map(|level| level.as_str()) {
        Ok("error") => LevelFilter::Error,
        Ok("warn") => LevelFilter::Warn,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

// Prints the tree sideways: right subtree on top, each node as `*-height-[ value ]`.
fn print_node<T: Display>(node: Option<NodeRef<T>>, depth: usize) {
    if let Some(node) = node {
        print_node(node.right(), depth + 1);
        println!();
        println!("{}*-{}-[ {} ]", INDENTATION.repeat(depth), node.height(), node.value());
        print_node(node.left(), depth + 1);
    }
}

fn print_tree<T: Display>(name: &str, tree: &AvlTree<T>) {
    println!("printing tree {}:", name);
    println!("size = {}", tree.len());
    println!("height = {}", tree.height());
    print_node(tree.root(), 0);
    println!();
}

fn main() {
    if let Err(err) = SimpleLogger::init(log_level(), Config::default()) {
        eprintln!("Error: unable to initialize logger: {}", err);
    }

    let mut first = AvlTree::new();
    for value in 0..10 {
        if let Err(err) = first.insert(value) {
            error!("unable to insert {}: {}", value, err);
        }
    }

    let second = match AvlTree::from_list(vec![101010, 137, 42]) {
        Ok(tree) => tree,
        Err(err) => {
            error!("unable to build tree: {}", err);
            return;
        },
    };

    let united = AvlTree::union(&first, &second);
    info!("united {} and {} values into {}", first.len(), second.len(), united.len());

    print_tree("first", &first);
    print_tree("second", &second);
    print_tree("united", &united);
}
