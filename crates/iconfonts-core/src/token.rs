//! Per-match token data.

/// One matched icon token, borrowed from the input text.
///
/// Tokens are constructed per match and discarded after rendering; nothing
/// persists across tokens or rendering passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconToken<'t> {
    /// The literal registered prefix present at the token start.
    pub prefix: &'t str,
    /// Icon identifier (`[a-zA-Z0-9-]+`).
    pub name: &'t str,
    /// Modifier suffixes from the first colon-segment, in input order.
    pub mods: Vec<&'t str>,
    /// Verbatim classes from the second colon-segment, in input order.
    pub user_classes: Vec<&'t str>,
}

impl IconToken<'_> {
    /// Compose the space-joined class list.
    ///
    /// Fixed order: base class (if any), icon class (`prefix + name`), one
    /// prefixed class per modifier, then user classes verbatim. Absent parts
    /// are omitted without leaving double spaces.
    #[must_use]
    pub fn class_list(&self, base: Option<&str>) -> String {
        let mut classes = String::with_capacity(32);

        if let Some(base) = base {
            classes.push_str(base);
            classes.push(' ');
        }
        classes.push_str(self.prefix);
        classes.push_str(self.name);

        for m in &self.mods {
            classes.push(' ');
            classes.push_str(self.prefix);
            classes.push_str(m);
        }
        for user in &self.user_classes {
            classes.push(' ');
            classes.push_str(user);
        }

        classes
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn token<'t>(prefix: &'t str, name: &'t str) -> IconToken<'t> {
        IconToken {
            prefix,
            name,
            mods: Vec::new(),
            user_classes: Vec::new(),
        }
    }

    #[test]
    fn test_name_only() {
        assert_eq!(token("icon-", "html5").class_list(None), "icon-html5");
    }

    #[test]
    fn test_with_base() {
        assert_eq!(
            token("icon-", "html5").class_list(Some("icon")),
            "icon icon-html5"
        );
    }

    #[test]
    fn test_mods_in_order() {
        let mut t = token("icon-", "spinner");
        t.mods = vec!["large", "spin"];
        assert_eq!(t.class_list(None), "icon-spinner icon-large icon-spin");
    }

    #[test]
    fn test_user_classes_after_mods() {
        let mut t = token("fa-", "spinner");
        t.mods = vec!["2x", "spin"];
        t.user_classes = vec!["red"];
        assert_eq!(t.class_list(Some("fa")), "fa fa-spinner fa-2x fa-spin red");
    }

    #[test]
    fn test_user_classes_without_mods() {
        let mut t = token("glyphicon-", "remove");
        t.user_classes = vec!["bold"];
        assert_eq!(
            t.class_list(Some("glyphicon")),
            "glyphicon glyphicon-remove bold"
        );
    }

    #[test]
    fn test_empty_prefix() {
        assert_eq!(token("", "html5").class_list(None), "html5");
    }
}
