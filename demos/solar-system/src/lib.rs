use wasm_bindgen::prelude::*;
use orrery_engine::*;

mod app;
mod bodies;
mod planet;
use app::SolarSystem;

orrery_web::export_viewer!(SolarSystem, "solar-system");
