use std::convert::TryFrom;
use std::fmt;

pub const AFS_SERVICE: &str = "afs";

/// AFS cell together with the Kerberos realm that serves its tickets.
#[derive(Clone, Debug, PartialEq)]
pub struct AfsCell {
    pub name: String,
    pub realm: String,
}

impl AfsCell {
    /// The cell name is lowercased. If no realm is given it is deduced from
    /// the cell name in uppercase, otherwise it is used as it is.
    pub fn new(name: &str, realm: Option<&str>) -> Self {
        let name = name.to_lowercase();
        let realm = match realm {
            Some(realm) => realm.to_string(),
            None => name.to_uppercase(),
        };
        return Self { name, realm };
    }

    /// Name components of the service principal: `afs/<cell>`.
    pub fn service_parts(&self) -> Vec<String> {
        return vec![AFS_SERVICE.to_string(), self.name.clone()];
    }

    pub fn principal(&self) -> String {
        return format!("{}/{}@{}", AFS_SERVICE, self.name, self.realm);
    }

    /// Description of the rxrpc key in the keyring: `afs@<cell>`.
    pub fn key_description(&self) -> String {
        return format!("{}@{}", AFS_SERVICE, self.name);
    }
}

impl fmt::Display for AfsCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.principal())
    }
}

impl TryFrom<&str> for AfsCell {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() || value.contains(|c| c == '/' || c == '@') {
            return Err(format!(
                "Invalid cell '{}', it must be a name like example.com",
                value
            ));
        }

        return Ok(AfsCell::new(value, None));
    }
}

impl TryFrom<String> for AfsCell {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        return Self::try_from(value.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_case_folding() {
        let cell = AfsCell::new("Grand.Central.ORG", None);
        assert_eq!("grand.central.org", cell.name);
        assert_eq!("GRAND.CENTRAL.ORG", cell.realm);
        assert_eq!("afs/grand.central.org@GRAND.CENTRAL.ORG", cell.principal());
        assert_eq!("afs@grand.central.org", cell.key_description());
    }

    #[test]
    fn test_cell_with_realm() {
        let cell = AfsCell::new("EXAMPLE.com", Some("AD.Example.COM"));
        assert_eq!("example.com", cell.name);
        assert_eq!("AD.Example.COM", cell.realm);
        assert_eq!(
            vec!["afs".to_string(), "example.com".to_string()],
            cell.service_parts()
        );
    }

    #[test]
    fn test_cell_try_from() {
        assert_eq!(
            AfsCell::new("example.com", None),
            AfsCell::try_from("Example.Com").unwrap()
        );
        assert!(AfsCell::try_from("").is_err());
        assert!(AfsCell::try_from("afs/example.com").is_err());
        assert!(AfsCell::try_from("afs@example.com").is_err());
    }
}
