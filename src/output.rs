use crate::error::Result;
use crate::label::LINE_BREAK;
use crate::marker::{GroupKey, Label};
use crate::registry::{Entry, MarkerManager};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

const KML_NS: &str = "http://www.opengis.net/kml/2.2";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Json,
    Kml,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match &*s.to_ascii_lowercase() {
            "json" => Ok(Format::Json),
            "kml" => Ok(Format::Kml),
            other => Err(format!("unknown output format '{}', expected json or kml", other)),
        }
    }
}

#[derive(Serialize)]
struct Document<'a> {
    airfield: &'a MarkerManager,
    waypoint: &'a MarkerManager,
}

pub fn write<W: Write>(
    format: Format,
    writer: W,
    airfields: &MarkerManager,
    waypoints: &MarkerManager,
) -> Result<()> {
    match format {
        Format::Json => write_json(writer, airfields, waypoints),
        Format::Kml => write_kml(writer, airfields, waypoints),
    }
}

pub fn write_json<W: Write>(writer: W, airfields: &MarkerManager, waypoints: &MarkerManager) -> Result<()> {
    serde_json::to_writer_pretty(
        writer,
        &Document {
            airfield: airfields,
            waypoint: waypoints,
        },
    )?;
    Ok(())
}

fn text_element<W: Write>(w: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn start<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(w: &mut Writer<W>, name: &str) -> Result<()> {
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_placemark<W: Write>(w: &mut Writer<W>, entry: &Entry) -> Result<()> {
    let marker = &entry.marker;
    let text = marker.label.text().replace(LINE_BREAK, "\n");
    let name = text.lines().next().unwrap_or("");

    start(w, "Placemark")?;
    text_element(w, "name", name)?;
    text_element(w, "description", &text)?;

    start(w, "Style")?;
    start(w, "IconStyle")?;
    if let Some(color) = marker.icon.color() {
        let opacity = if marker.icon.fill_color.is_some() {
            marker.icon.fill_opacity
        } else {
            marker.icon.stroke_opacity
        };
        text_element(w, "color", &color.to_kml(opacity))?;
    }
    text_element(w, "scale", &marker.icon.scale.to_string())?;
    if let Some(rotation) = marker.icon.rotation {
        text_element(w, "heading", &rotation.rem_euclid(360.0).to_string())?;
    }
    end(w, "IconStyle")?;
    start(w, "LabelStyle")?;
    match &marker.label {
        Label::Rich(label) => text_element(w, "color", &label.style.color.to_kml(label.style.opacity))?,
        // Tooltips stay hidden until hovered.
        Label::Tooltip(_) => text_element(w, "scale", "0")?,
    }
    end(w, "LabelStyle")?;
    end(w, "Style")?;

    start(w, "Point")?;
    text_element(w, "coordinates", &marker.position.to_kml())?;
    end(w, "Point")?;
    end(w, "Placemark")
}

fn write_folder<W: Write>(w: &mut Writer<W>, key: GroupKey, registry: &MarkerManager) -> Result<()> {
    start(w, "Folder")?;
    text_element(w, "name", key.into())?;
    for entry in registry.entries() {
        write_placemark(w, entry)?;
    }
    end(w, "Folder")
}

pub fn write_kml<W: Write>(writer: W, airfields: &MarkerManager, waypoints: &MarkerManager) -> Result<()> {
    let mut w = Writer::new_with_indent(writer, b' ', 2);
    w.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    w.write_event(Event::Start(BytesStart::new("kml").with_attributes([("xmlns", KML_NS)])))?;
    start(&mut w, "Document")?;
    write_folder(&mut w, GroupKey::Airfield, airfields)?;
    write_folder(&mut w, GroupKey::Waypoint, waypoints)?;
    end(&mut w, "Document")?;
    end(&mut w, "kml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Classifier;
    use crate::feature::{AttributesBuilder, Feature};
    use crate::flags::Flag;
    use crate::registry::{register_all, Registries};

    fn registries() -> (MarkerManager, MarkerManager) {
        let sion = AttributesBuilder::default()
            .name("Sion")
            .icao("LSMP")
            .frequency("0")
            .elevation("482")
            .runway("2709")
            .build()
            .unwrap();
        let lac = AttributesBuilder::default()
            .description("Lac & Joux")
            .build()
            .unwrap();
        let features = vec![
            Feature::airfield(Flag::Asphalt.into(), [7.33, 46.22], sion),
            Feature::waypoint([6.28, 46.63], lac),
        ];
        let batch = Classifier::default().classify_batch(&features);
        let mut airfields = MarkerManager::new();
        let mut waypoints = MarkerManager::new();
        register_all(
            batch.markers,
            &mut Registries {
                airfield: &mut airfields,
                waypoint: &mut waypoints,
            },
        );
        (airfields, waypoints)
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert_eq!("KML".parse::<Format>(), Ok(Format::Kml));
        assert!("svg".parse::<Format>().is_err());
    }

    #[test]
    fn test_json_document() {
        let (airfields, waypoints) = registries();
        let mut buf = Vec::new();
        write(Format::Json, &mut buf, &airfields, &waypoints).unwrap();

        let doc: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let sion = &doc["airfield"][0];
        assert_eq!(sion["priority"], 10);
        assert_eq!(sion["marker"]["position"]["lat"], 46.22);
        assert_eq!(sion["marker"]["icon"]["fill_color"], "#336699");
        assert_eq!(sion["marker"]["icon"]["rotation"], 180.0);
        assert_eq!(sion["marker"]["label"]["rich"]["text"], "Sion (LSMP)<br/> 482m");
        assert_eq!(sion["marker"]["group"]["key"], "airfield");
        assert_eq!(doc["waypoint"][0]["marker"]["label"]["tooltip"], "Lac & Joux");
        assert_eq!(doc["waypoint"][0]["marker"]["icon"]["path"], "circle");
    }

    #[test]
    fn test_kml_document() {
        let (airfields, waypoints) = registries();
        let mut buf = Vec::new();
        write(Format::Kml, &mut buf, &airfields, &waypoints).unwrap();
        let kml = String::from_utf8(buf).unwrap();

        assert!(kml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(kml.contains("<kml xmlns=\"http://www.opengis.net/kml/2.2\">"));
        assert!(kml.contains("<name>airfield</name>"));
        assert!(kml.contains("<name>Sion (LSMP)</name>"));
        assert!(kml.contains("<heading>180</heading>"));
        assert!(kml.contains("<color>b3996633</color>"));
        assert!(kml.contains("<coordinates>7.33,46.22</coordinates>"));
        assert!(kml.contains("<name>Lac &amp; Joux</name>"));
        assert!(kml.trim_end().ends_with("</kml>"));
    }
}
