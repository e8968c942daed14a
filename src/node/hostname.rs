/// Maps storage-client hostnames to scheduler node names.
///
/// Clients on the storage network carry an extra infix in their hostname
/// (`c5ib-2` for node `c5-2`). Every occurrence of the infix is removed, so
/// the mapping is not invertible when the infix also appears by accident.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostTransform {
    infix: String,
}

impl HostTransform {
    pub fn new(infix: &str) -> Self {
        HostTransform {
            infix: infix.to_string(),
        }
    }

    pub fn node_name(&self, hostname: &str) -> String {
        if self.infix.is_empty() {
            return hostname.to_string();
        }
        hostname.replace(&self.infix, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_infiniband_infix() {
        let t = HostTransform::new("ib");
        assert_eq!(t.node_name("c5ib-2"), "c5-2");
        assert_eq!(t.node_name("c1"), "c1");
    }

    #[test]
    fn empty_infix_is_identity() {
        assert_eq!(HostTransform::new("").node_name("c5ib-2"), "c5ib-2");
    }

    #[test]
    fn removes_every_occurrence() {
        assert_eq!(HostTransform::new("ib").node_name("libc5ib-2"), "lc5-2");
    }
}
