#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
    // to run: `trunk serve --open --features csr`
}

#[cfg(feature = "csr")]
pub fn main() {
    use reviewboard::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
