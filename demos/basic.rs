use urlengine::Url;

fn main() {
    // Parse a URL and read its components
    let mut url = Url::parse("HTTPS://user@Example.com:443/a/./b/../c?query=value#hash", None)
        .expect("Failed to parse URL");

    println!("URL: {}", url.href()); // https://user@example.com/a/c?query=value#hash
    println!("Protocol: {}", url.protocol()); // https:
    println!("Username: {}", url.username()); // user
    println!("Host: {}", url.host()); // example.com
    println!("Pathname: {}", url.pathname()); // /a/c
    println!("Search: {}", url.search()); // ?query=value
    println!("Hash: {}", url.hash()); // #hash
    println!("Origin: {}", url.origin()); // https://example.com

    // Resolve a relative reference
    let next = Url::parse_with_base("../d?page=2", &url).expect("Failed to resolve URL");
    println!("Resolved: {next}"); // https://user@example.com/d?page=2

    // Setters edit one component and keep the rest
    url.set_port("8443");
    url.set_hash("");
    println!("Updated: {url}"); // https://user@example.com:8443/a/c?query=value
}
