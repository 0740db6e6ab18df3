use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub(crate) struct BackgroundImages {
    #[serde(default)]
    pub desktop_image: Option<String>,
    #[serde(default)]
    pub mobile_image: Option<String>,
}

impl BackgroundImages {
    fn cleaned(self) -> Self {
        let keep = |s: Option<String>| s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            desktop_image: keep(self.desktop_image),
            mobile_image: keep(self.mobile_image),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.desktop_image.is_none() && self.mobile_image.is_none()
    }
}

/// Decodes the `data-background-images` attribute. The authoring tool stores
/// it either as plain JSON or with every character backslash-escaped.
pub(crate) fn decode_background_images(raw: &str) -> Option<BackgroundImages> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = serde_json::from_str::<BackgroundImages>(raw)
        .or_else(|_| serde_json::from_str::<BackgroundImages>(&unescape_backslashes(raw)));
    match parsed {
        Ok(images) => Some(images.cleaned()).filter(|images| !images.is_empty()),
        Err(err) => {
            tracing::debug!("ignoring malformed background images {:?}: {}", raw, err);
            None
        }
    }
}

fn unescape_backslashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
            continue;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_json() {
        let images =
            decode_background_images(r#"{"desktop_image":"/d.jpg","mobile_image":"/m.jpg"}"#)
                .unwrap();
        assert_eq!(images.desktop_image.as_deref(), Some("/d.jpg"));
        assert_eq!(images.mobile_image.as_deref(), Some("/m.jpg"));
    }

    #[test]
    fn decodes_escaped_json() {
        let images = decode_background_images(r#"{\"desktop_image\":\"/d.jpg\"}"#).unwrap();
        assert_eq!(images.desktop_image.as_deref(), Some("/d.jpg"));
        assert!(images.mobile_image.is_none());
    }

    #[test]
    fn tolerates_garbage_and_empty() {
        assert!(decode_background_images("{not json").is_none());
        assert!(decode_background_images("").is_none());
        assert!(decode_background_images("{}").is_none());
        assert!(decode_background_images(r#"{"desktop_image":"  "}"#).is_none());
    }
}
