use frontier_graph::graph::edge_list;
use frontier_graph::{Error, Johnson, Prim};

fn usage() -> ! {
    eprintln!("usage: graphs <mst|sssp> <edge-list-file>");
    eprintln!("  mst   - undirected input, prints the MST total weight");
    eprintln!("  sssp  - directed input, prints the shortest shortest path");
    std::process::exit(2);
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        usage();
    }

    let outcome = match args[1].as_str() {
        "mst" => edge_list::load_undirected(&args[2])
            .and_then(|graph| Prim::new().total_weight(&graph)),
        "sssp" => edge_list::load_directed(&args[2])
            .and_then(|graph| Johnson::new().shortest_shortest_path(&graph)),
        _ => usage(),
    };

    match outcome {
        Ok(answer) => println!("{answer}"),
        Err(Error::NegativeCycle) => println!("negative cycle"),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
