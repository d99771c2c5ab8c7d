//! Markup document inspector.
//!
//! Usage: `markup-inspect <document.json> [config.json]`
//!
//! Decodes the document and prints every annotation in draw order with its
//! knobs and selection border.

/// Inspector entry point for native builds
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

// The inspector needs a filesystem; there is nothing to run on WASM.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, bail};
    use markup::borders;
    use markup::config::EditorConfig;
    use markup::format;
    use markup::knobs;
    use markup::model::{AnnotationModel, next_number_value};

    pub fn run() -> anyhow::Result<()> {
        let mut args = std::env::args_os().skip(1).map(PathBuf::from);
        let Some(document_path) = args.next() else {
            bail!("usage: markup-inspect <document.json> [config.json]");
        };

        let config = match args.next() {
            Some(path) => EditorConfig::load_from_path(&path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => EditorConfig::load_from_default_path().unwrap_or_default(),
        };

        env_logger::Builder::new()
            .filter_level(config.log_level.to_level_filter())
            .parse_default_env()
            .init();

        let json = std::fs::read_to_string(&document_path)
            .with_context(|| format!("Failed to read {:?}", document_path))?;
        let annotations = format::from_json(&json)
            .with_context(|| format!("Failed to decode {:?}", document_path))?;

        log::info!(
            "Loaded {} annotations from {:?}",
            annotations.len(),
            document_path
        );

        for (index, annotation) in annotations.iter().enumerate() {
            print_annotation(index, annotation);
        }
        println!(
            "next number label: {}",
            next_number_value(&annotations, config.defaults.first_number)
        );

        Ok(())
    }

    fn print_annotation(index: usize, annotation: &AnnotationModel) {
        let c = annotation.color().to_rgba_u8();
        println!(
            "#{index} {} {} color=#{:02x}{:02x}{:02x}{:02x} points={}",
            annotation.kind(),
            annotation.id(),
            c[0],
            c[1],
            c[2],
            c[3],
            annotation.points().len()
        );

        if let Some(content) = annotation.text_content() {
            println!(
                "    text {:?} size={} align={}",
                content.text,
                content.style.font_size,
                content.style.alignment.name()
            );
        }
        if let Some(value) = annotation.number_value() {
            println!("    number {value}");
        }

        match knobs::knob_pair(annotation) {
            Some(pair) => {
                for knob in pair.knobs() {
                    println!(
                        "    knob {} at ({:.1}, {:.1})",
                        knob.role.name(),
                        knob.position.x,
                        knob.position.y
                    );
                }
            }
            None => println!("    no knobs"),
        }

        let rect = borders::borders_rect(annotation);
        println!(
            "    border ({:.1}, {:.1}) {:.1}x{:.1} width={}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            borders::border_line_width(annotation)
        );
    }
}
