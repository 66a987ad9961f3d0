fn main() {
    // Unique per build; surfaced by the health endpoint so deployments can be told apart.
    let id = uuid::Uuid::new_v4().simple().to_string();
    // Safe: UUID simple format is hex (ASCII only)
    #[allow(clippy::string_slice)]
    let short_id = &id[..8];
    println!("cargo:rustc-env=BUILD_ID={}", short_id);
}
