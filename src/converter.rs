use crate::{CompactXmlDecoder, DecodeOptions, ResourceId, ResourceTable, Result};
use log::{info, warn};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};

/// High-level converter for binary XML to text XML conversion
///
/// The whole input is read into memory before decoding starts.
#[derive(Clone, Debug, Default)]
pub struct AxmlToXmlConverter {
    options: DecodeOptions,
}

impl AxmlToXmlConverter {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Convert binary XML from a reader to a writer
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use binres::AxmlToXmlConverter;
    /// use std::fs::File;
    ///
    /// let input = File::open("AndroidManifest.xml").unwrap();
    /// let output = File::create("manifest.xml").unwrap();
    /// AxmlToXmlConverter::default().convert(input, output).unwrap();
    /// ```
    pub fn convert<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<()> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        let xml = self.convert_bytes(&data)?;
        writer.write_all(xml.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Convert a binary XML file to a text XML file
    ///
    /// Converting a file onto itself overwrites it in place.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use binres::AxmlToXmlConverter;
    ///
    /// AxmlToXmlConverter::default()
    ///     .convert_file("AndroidManifest.xml", "manifest.xml")
    ///     .unwrap();
    /// ```
    pub fn convert_file(&self, input_path: &str, output_path: &str) -> Result<()> {
        if input_path == output_path {
            return self.convert_file_in_place(input_path);
        }

        let reader = BufReader::new(File::open(input_path)?);
        let writer = BufWriter::new(File::create(output_path)?);
        self.convert(reader, writer)
    }

    /// Convert binary XML from stdin to stdout
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use binres::AxmlToXmlConverter;
    ///
    /// // cat AndroidManifest.xml | binres xml - -
    /// AxmlToXmlConverter::default().convert_stdin_stdout().unwrap();
    /// ```
    pub fn convert_stdin_stdout(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.convert(stdin.lock(), BufWriter::new(stdout.lock()))
    }

    /// Convert binary XML from stdin to a file
    pub fn convert_stdin_to_file(&self, output_path: &str) -> Result<()> {
        let stdin = io::stdin();
        let writer = BufWriter::new(File::create(output_path)?);
        self.convert(stdin.lock(), writer)
    }

    /// Convert a binary XML file to stdout
    pub fn convert_file_to_stdout(&self, input_path: &str) -> Result<()> {
        let reader = BufReader::new(File::open(input_path)?);
        let stdout = io::stdout();
        self.convert(reader, stdout.lock())
    }

    /// The input is fully decoded before the file is truncated, so a
    /// failed conversion leaves it untouched
    fn convert_file_in_place(&self, file_path: &str) -> Result<()> {
        let data = fs::read(file_path)?;
        let xml = self.convert_bytes(&data)?;
        fs::write(file_path, xml)?;
        info!("Converted {} in place", file_path);
        Ok(())
    }

    /// Convert in-memory binary XML to a String
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use binres::AxmlToXmlConverter;
    ///
    /// let data = std::fs::read("AndroidManifest.xml").unwrap();
    /// let xml = AxmlToXmlConverter::default().convert_bytes(&data).unwrap();
    /// println!("{}", xml);
    /// ```
    pub fn convert_bytes(&self, data: &[u8]) -> Result<String> {
        let document = CompactXmlDecoder::with_options(data, self.options.clone())?.decode()?;
        Ok(document.xml)
    }

    /// Convert binary XML held in a Vec<u8> to a String
    pub fn convert_vec(&self, data: Vec<u8>) -> Result<String> {
        self.convert_bytes(&data)
    }
}

/// Writes the resource index of a table as text, one line per value:
/// `<id> <type>/<key> [<qualifier>] <value>`
#[derive(Clone, Debug, Default)]
pub struct ResourceTableDumper {
    ids: Vec<ResourceId>,
}

impl ResourceTableDumper {
    /// Dump only the given ids, in the given order
    pub fn with_ids(ids: Vec<ResourceId>) -> Self {
        Self { ids }
    }

    pub fn dump<W: Write>(&self, table: &ResourceTable, mut writer: W) -> Result<()> {
        let mut names: HashMap<ResourceId, String> = HashMap::new();
        for entry in table.entries() {
            names
                .entry(entry.id)
                .or_insert_with(|| format!("{}/{}", entry.type_name, entry.key));
        }

        let selected: Vec<ResourceId> = if self.ids.is_empty() {
            table.index().iter().map(|(id, _)| id).collect()
        } else {
            self.ids.clone()
        };
        for id in selected {
            let values = table.index().get(id);
            if values.is_empty() {
                warn!("Resource {} has no values", id);
                continue;
            }
            let name = names.get(&id).map(String::as_str).unwrap_or("?");
            for value in values {
                writeln!(
                    writer,
                    "{} {} [{}] {}",
                    id,
                    name,
                    value.config.qualifier(),
                    value.value
                )?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    pub fn dump_bytes<W: Write>(&self, data: &[u8], writer: W) -> Result<()> {
        let table = ResourceTable::decode(data)?;
        self.dump(&table, writer)
    }

    /// Dump a table file, `-` reading from stdin
    pub fn dump_file<W: Write>(&self, input_path: &str, writer: W) -> Result<()> {
        let data = if input_path == "-" {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            data
        } else {
            fs::read(input_path)?
        };
        self.dump_bytes(&data, writer)
    }

    pub fn dump_to_string(&self, data: &[u8]) -> Result<String> {
        let mut output = Vec::new();
        self.dump_bytes(data, &mut output)?;
        Ok(String::from_utf8_lossy(&output).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{
        ConfigBytes, package_chunk, permission_manifest, simple_entry, table, type_chunk,
    };
    use crate::{BinResError, LineEnding, TYPE_INT_DEC, TYPE_STRING};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn sample_table() -> Vec<u8> {
        let chunks = vec![
            type_chunk(
                5,
                &ConfigBytes::default_config().bytes(),
                &[
                    Some(simple_entry(0, TYPE_STRING, 0)),
                    Some(simple_entry(1, TYPE_INT_DEC, 3)),
                ],
            ),
            type_chunk(
                5,
                &ConfigBytes::locale("de", "").bytes(),
                &[Some(simple_entry(0, TYPE_STRING, 1))],
            ),
        ];
        let package = package_chunk(
            0x7f,
            "com.example",
            &["attr", "drawable", "layout", "mipmap", "string"],
            &["app_name", "count"],
            &chunks,
        );
        table(&["Example", "Beispiel"], &[package])
    }

    #[test]
    fn test_convert_bytes() {
        let xml = AxmlToXmlConverter::default()
            .convert_bytes(&permission_manifest())
            .unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n"));
        assert!(xml.contains("<manifest package=\"com.example\">"));
    }

    #[test]
    fn test_convert_with_options() {
        let converter =
            AxmlToXmlConverter::new(DecodeOptions::default().line_ending(LineEnding::Lf));
        let mut output = Vec::new();
        converter
            .convert(Cursor::new(permission_manifest()), &mut output)
            .unwrap();
        let xml = String::from_utf8(output).unwrap();
        assert!(!xml.contains('\r'));
        assert_eq!(xml.lines().count(), 5);
    }

    #[test]
    fn test_convert_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("AndroidManifest.xml");
        let output = dir.path().join("manifest.xml");
        fs::write(&input, permission_manifest()).unwrap();

        AxmlToXmlConverter::default()
            .convert_file(input.to_str().unwrap(), output.to_str().unwrap())
            .unwrap();
        let xml = fs::read_to_string(&output).unwrap();
        assert!(xml.contains("<uses-permission name=\"android.permission.INTERNET\">"));
    }

    #[test]
    fn test_convert_file_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("AndroidManifest.xml");
        fs::write(&path, permission_manifest()).unwrap();
        let path = path.to_str().unwrap();

        AxmlToXmlConverter::default().convert_file(path, path).unwrap();
        let xml = fs::read_to_string(path).unwrap();
        assert!(xml.contains("</manifest>"));
    }

    #[test]
    fn test_failed_in_place_conversion_keeps_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.xml");
        let garbage = vec![0x03, 0x00, 0x08, 0x00, 0xFF, 0x00, 0x00, 0x00];
        fs::write(&path, &garbage).unwrap();
        let path = path.to_str().unwrap();

        assert!(AxmlToXmlConverter::default().convert_file(path, path).is_err());
        assert_eq!(fs::read(path).unwrap(), garbage);
    }

    #[test]
    fn test_missing_input_file() {
        let result = AxmlToXmlConverter::default()
            .convert_file("/nonexistent/AndroidManifest.xml", "/nonexistent/out.xml");
        assert!(matches!(result, Err(BinResError::Io(_))));
    }

    #[test]
    fn test_dump_all_values() {
        let output = ResourceTableDumper::default()
            .dump_to_string(&sample_table())
            .unwrap();
        assert_eq!(
            output,
            "0x7f050000 string/app_name [default] Example\n\
             0x7f050000 string/app_name [de] Beispiel\n\
             0x7f050001 string/count [default] 3\n"
        );
    }

    #[test]
    fn test_dump_selected_ids() {
        let dumper = ResourceTableDumper::with_ids(vec![ResourceId(0x7f05_0001), ResourceId(0x7f05_0009)]);
        let output = dumper.dump_to_string(&sample_table()).unwrap();
        assert_eq!(output, "0x7f050001 string/count [default] 3\n");
    }

    #[test]
    fn test_dump_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&sample_table()).unwrap();
        let mut output = Vec::new();
        ResourceTableDumper::default()
            .dump_file(file.path().to_str().unwrap(), &mut output)
            .unwrap();
        assert_eq!(String::from_utf8(output).unwrap().lines().count(), 3);
    }
}
