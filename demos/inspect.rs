use argflags::FlagParser;

fn main() {
    let flags = FlagParser::new().terminator(true).parse();

    for flag in &flags {
        println!("{:10}{:9}{}", flag.key(), flag.kind().to_string(), flag.value());
    }

    if !flags.remaining().is_empty() {
        println!("remaining: {}", flags.remaining().join(" "));
    }
}
