/// Seed for the spawn generator when the host does not pick one
pub(super) fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (noise << 32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0x5EED_5EED)
    }
}
