//! Images
//!
//! Product images are stored either as absolute delivery URLs or as bare CDN public ids. The
//! resolver turns both into a delivery URL and optionally splices a transformation into it.

/// Path marker that precedes transformations and the public id in delivery URLs.
pub const UPLOAD_MARKER: &str = "/image/upload/";

/// Host serving delivery URLs.
pub const DELIVERY_HOST: &str = "https://res.cloudinary.com";

/// Transformation used for listing thumbnails: automatic format, best automatic quality,
/// device-pixel-ratio aware, 1000px wide.
pub const THUMBNAIL_TRANSFORM: &str = "f_auto,q_auto:best,dpr_auto,w_1000";

/// Maps stored image references onto delivery URLs for one CDN account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResolver {
    cloud_name: Option<String>,
}

impl ImageResolver {
    /// Create a resolver for `cloud_name`; a blank name means no account is configured.
    pub fn new(cloud_name: Option<&str>) -> Self {
        Self {
            cloud_name: cloud_name
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(ToString::to_string),
        }
    }

    /// Configured account name.
    pub fn cloud_name(&self) -> Option<&str> {
        self.cloud_name.as_deref()
    }

    /// Resolve `reference` into a delivery URL, applying `transform` when given.
    ///
    /// Absolute URLs are returned as-is unless a transform is requested and the URL carries
    /// [`UPLOAD_MARKER`]; the transform is then inserted right after the marker, once. Bare ids
    /// are expanded against the configured account, or returned unchanged when there is none.
    pub fn resolve(&self, reference: &str, transform: Option<&str>) -> String {
        let value = reference.trim();

        if value.is_empty() {
            return String::new();
        }

        let transform = transform
            .map(|t| t.trim().trim_matches('/'))
            .filter(|t| !t.is_empty());

        if is_http_url(value) {
            return match transform {
                Some(transform) => splice_transform(value, transform),
                None => value.to_string(),
            };
        }

        let Some(cloud_name) = self.cloud_name() else {
            return value.to_string();
        };

        let public_id = value.trim_start_matches('/');

        match transform {
            Some(transform) => {
                format!("{DELIVERY_HOST}/{cloud_name}{UPLOAD_MARKER}{transform}/{public_id}")
            }
            None => format!("{DELIVERY_HOST}/{cloud_name}{UPLOAD_MARKER}{public_id}"),
        }
    }

    /// Resolve `reference` with [`THUMBNAIL_TRANSFORM`].
    pub fn thumbnail(&self, reference: &str) -> String {
        self.resolve(reference, Some(THUMBNAIL_TRANSFORM))
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn splice_transform(url: &str, transform: &str) -> String {
    let Some((prefix, rest)) = url.split_once(UPLOAD_MARKER) else {
        return url.to_string();
    };

    // Chained transforms span several segments.
    let already_applied = rest
        .strip_prefix(transform)
        .is_some_and(|tail| tail.starts_with('/'));

    if already_applied {
        return url.to_string();
    }

    format!("{prefix}{UPLOAD_MARKER}{transform}/{rest}")
}
