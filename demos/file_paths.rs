use urlengine::{PathStyle, Url, file_url_to_path, path_to_file_url};

fn main() {
    let url = path_to_file_url("/home/user/My Documents/notes.txt", PathStyle::Posix)
        .expect("Failed to convert path");
    println!("POSIX path as URL: {url}"); // file:///home/user/My%20Documents/notes.txt

    let url = path_to_file_url("C:\\Users\\user\\report #1.docx", PathStyle::Windows)
        .expect("Failed to convert path");
    println!("Windows path as URL: {url}"); // file:///C:/Users/user/report%20%231.docx

    let url = Url::parse("file://server/share/data%20set.csv", None).expect("Failed to parse URL");
    match file_url_to_path(&url, PathStyle::Windows) {
        Ok(path) => println!("UNC path: {path}"), // \\server\share\data set.csv
        Err(error) => println!("Error: {error}"),
    }
    match file_url_to_path(&url, PathStyle::Posix) {
        Ok(path) => println!("POSIX path: {path}"),
        Err(error) => println!("Error: {error}"), // File URL host must be "localhost" or empty on this platform
    }
}
