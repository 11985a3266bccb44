//! Helpers for checking the decoder against published registries.

pub const URL_REPO: &str = "https://raw.githubusercontent.com/KhronosGroup/Vulkan-Docs";
pub const URL_MAIN: &str = "https://raw.githubusercontent.com/KhronosGroup/Vulkan-Docs/main/xml/vk.xml";

/// Fetches `url` into memory, panicking on any transport or HTTP failure.
pub fn download(url: &str) -> Vec<u8> {
    let resp = minreq::get(url)
        .send()
        .unwrap_or_else(|e| panic!("Failed to GET resource {:?}: {}", url, e));

    let is_success = 200 <= resp.status_code && resp.status_code < 300;
    if !is_success {
        panic!("Download request failed with status: {:?}", resp.status_code)
    }
    resp.into_bytes()
}

/// Decodes a downloaded registry, then checks that writing it out and decoding
/// again yields the same value.
pub fn check_registry(bytes: &[u8]) -> vk_registry::Registry {
    let registry = match vk_registry::parse_stream(bytes) {
        Ok(registry) => registry,
        Err(fatal_error) => panic!("{}", fatal_error),
    };

    let mut written = Vec::new();
    if let Err(fatal_error) = registry.write_xml(&mut written) {
        panic!("{}", fatal_error);
    }
    match vk_registry::parse_stream(written.as_slice()) {
        Ok(reparsed) => assert_eq!(reparsed, registry),
        Err(fatal_error) => panic!("{}", fatal_error),
    }
    registry
}

pub fn parsing_test(major: u32, minor: u32, patch: u32) -> vk_registry::Registry {
    let src = format!("{}/v{}.{}.{}/xml/vk.xml", URL_REPO, major, minor, patch);
    check_registry(&download(&src))
}
