#[cfg(target_arch = "wasm32")]
pub fn main() {
    tokenboard::mount();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
