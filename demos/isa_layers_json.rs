// Dump the resolved seven-layer table as JSON

use stdatm::layer::layers;

fn main() {
    let json = serde_json::to_string_pretty(layers()).expect("layer table serializes");
    println!("{json}");
}
