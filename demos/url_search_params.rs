/// `UrlSearchParams` usage example
use urlengine::{Url, UrlSearchParams};

fn main() {
    // Parse a query string
    let mut params = UrlSearchParams::parse("name=John&age=30&city=New+York");

    println!("name: {:?}", params.get("name")); // Some("John")
    println!("city: {:?}", params.get("city")); // Some("New York")
    println!();

    // Append keeps duplicates, set collapses them
    params.append("tag", "a");
    params.append("tag", "b");
    println!("tags: {:?}", params.get_all("tag")); // ["a", "b"]
    params.set("tag", "c&d");
    println!("After set: {params}"); // name=John&age=30&city=New+York&tag=c%26d

    params.delete("city", None);
    params.sort();
    println!("After delete and sort: {params}"); // age=30&name=John&tag=c%26d
    println!();

    // A URL's parameters write through to its query
    let mut url = Url::parse("https://example.com/search?q=rust", None).expect("Failed to parse URL");
    {
        let mut query = url.search_params_mut();
        query.append("page", "2");
        query.set("q", "rust url");
    }
    println!("URL: {url}"); // https://example.com/search?q=rust+url&page=2

    for (key, value) in url.search_params() {
        println!("  {key} = {value}");
    }
}
