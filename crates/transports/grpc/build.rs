// Build script for the rendezvous gRPC transport
// Handles protobuf code generation for the signaling service

fn main() {
    // Use vendored protoc from protoc-bin-vendored
    std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path().unwrap());

    compile_protos();

    // Rebuild when protobuf files change
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../../../proto/");
}

/// Compile protocol buffers for the signaling service
fn compile_protos() {
    std::fs::create_dir_all("src/generated")
        .unwrap_or_else(|e| panic!("Failed to create src/generated: {}", e));

    tonic_prost_build::configure()
        .build_server(true)
        .build_client(true) // Client is the peer adapters' side of the wire
        .out_dir("src/generated") // Output to src/generated directory
        .compile_protos(&["../../../proto/rendezvous.proto"], &["../../../proto/"])
        .unwrap_or_else(|e| panic!("Failed to compile protos: {}", e));
}
