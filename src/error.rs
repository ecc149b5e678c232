use custom_error::custom_error;

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    Io{source: std::io::Error} = "I/O error",
    Json{source: serde_json::Error} = "GeoJSON decode error",
    Zip{source: zip::result::ZipError} = "zip archive error",
    Xml{source: quick_xml::Error} = "KML write error",
    MalformedGeometry{lon: f64, lat: f64} = "malformed geometry [{lon}, {lat}]",
    UnrecognizedType{tag: String} = "unrecognized feature type '{tag}'"
}
