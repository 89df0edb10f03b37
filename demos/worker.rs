use argflags::FlagParser;

fn main() {
    let flags = FlagParser::new().parse();

    let workers = flags.integer("w").or(flags.integer("workers")).unwrap_or(4);
    let parallel = flags.boolean("parallel").unwrap_or(false);
    let name = flags.string("name").unwrap_or("worker");
    let verbose = flags.contains("v") || flags.contains("verbose");

    if verbose {
        for flag in &flags {
            println!("{flag}");
        }
    }

    println!("{name}: {workers} worker(s), parallel={parallel}");
}
