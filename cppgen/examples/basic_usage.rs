//! Basic Usage Example
//!
//! This example builds a small schema by hand and renders it through both
//! reference emitters, printing the generated C++ to stdout.
//!
//! Run with: `cargo run --example basic_usage`

use cppgen::emitter::{JsonEmitter, ZmqEmitter};
use cppgen::ir::{ClassIR, FieldIR, Schema, TypeIR};
use cppgen::render::{RenderConfig, Renderer};

fn main() {
    // A schema normally arrives from a loader; here we build one directly.
    let schema = Schema::new(vec![
        ClassIR::new(
            "Point",
            vec![
                FieldIR::new("x", TypeIR::classify("float")),
                FieldIR::new("y", TypeIR::classify("float")),
            ],
        ),
        ClassIR::new(
            "Batch",
            vec![
                FieldIR::new("items", TypeIR::classify("std::vector<int>")),
                FieldIR::new("label", TypeIR::classify("std::string")),
            ],
        ),
    ]);

    // =========================================================================
    // Example 1: JSON serializer functions
    // =========================================================================

    let json = Renderer::new(
        JsonEmitter::new().with_header("model.hpp"),
        RenderConfig::default(),
    );
    println!("--- serialize_json.cpp ---");
    println!("{}", json.render(&schema).expect("render json artifact"));

    // =========================================================================
    // Example 2: ZMQ send functions
    //
    // Note how the `items` field goes through `sendVector` while the other
    // fields use the scalar `send` call.
    // =========================================================================

    let zmq = Renderer::new(
        ZmqEmitter::new().with_header("model.hpp").with_namespace("wire"),
        RenderConfig::default(),
    );
    println!("--- zmq_send.cpp ---");
    println!("{}", zmq.render(&schema).expect("render zmq artifact"));
}
