mod app;
mod effects;
mod input;
mod logging;
mod render;

fn main() {
    logging::initialize(logging::LogDestination::File);
    app::run();
}
