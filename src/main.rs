use stardrift::GalaxyConfig;

fn main() {
    let config = GalaxyConfig::default().with_photos([
        "images/photo1.jpg",
        "images/photo2.jpg",
        "images/photo3.jpg",
        "images/photo4.jpg",
        "images/photo5.jpg",
        "images/photo6.jpg",
    ]);

    if let Err(e) = stardrift::run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
