use std::{env, path::PathBuf, process::Command};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");

    let workspace_root = PathBuf::from(&manifest_dir)
        .parent() // crates/
        .and_then(|p| p.parent())
        .expect("testing crate lives two levels below the workspace root")
        .to_path_buf();

    let program_dir = workspace_root.join("programs").join("creator-economy");
    let program_manifest = program_dir.join("Cargo.toml");

    println!("cargo:rerun-if-changed={}", program_manifest.display());
    println!("cargo:rerun-if-changed={}", program_dir.join("src").display());

    let output = Command::new("cargo")
        .args([
            "build-sbf",
            "--manifest-path",
            &program_manifest.to_string_lossy(),
        ])
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            eprintln!("Failed to build the creator economy program:");
            eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
            eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to execute cargo build-sbf: {}", e);
            eprintln!("Make sure you have the Solana CLI tools installed and in your PATH");
            std::process::exit(1);
        }
    }
}
