use std::process::Command;

fn main() {
	println!("cargo:rustc-env=RUST_BACKTRACE=1");
	println!("cargo:rerun-if-changed=.env");
	println!("cargo:rerun-if-env-changed=API_BASE_URL");
	println!("cargo:rerun-if-env-changed=ENV");
	println!("cargo:rerun-if-env-changed=TAILWIND");

	// a local .env may provide the values below; real environment variables win
	let _ = dotenvy::dotenv();

	let api_base_url = std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_owned());
	let env = std::env::var("ENV").unwrap_or_else(|_| "Local".to_owned());

	println!("cargo:rustc-env=API_BASE_URL={api_base_url}");
	println!("cargo:rustc-env=ENV={env}");

	if std::env::var("TAILWIND").is_ok_and(|v| v == "0") {
		println!("cargo:warning=TAILWIND=0, keeping the committed assets/tailwind.css");
	} else {
		build_tailwind();
	}
}

fn build_tailwind() {
	println!("cargo:rerun-if-changed=./input.css");
	println!("cargo:rerun-if-changed=./tailwind.config.js");

	let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
	let mut args = vec!["--no-install", "tailwindcss", "-i", "./input.css", "-o", "./assets/tailwind.css"];
	if profile == "release" {
		args.push("--minify");
	}

	match Command::new("npx").args(&args).output() {
		Ok(output) if output.status.success() => {},
		Ok(output) => println!("cargo:warning=Tailwind CSS compilation failed: {}", String::from_utf8_lossy(&output.stderr)),
		Err(e) => println!("cargo:warning=Could not run npx tailwindcss: {e}"),
	}
}
