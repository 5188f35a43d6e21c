use validator::ValidateEmail;

pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Syntax check only (`local-part@domain`); the domain is never resolved.
///
/// On top of the `validator` grammar the local part must be a dot-atom (no
/// leading, trailing or doubled dots) and the domain must have at least two
/// labels.
pub fn is_valid_email(value: &str) -> bool {
    if value.is_empty() || !value.validate_email() {
        return false;
    }
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    is_dot_atom(local) && is_qualified_domain(domain)
}

fn is_dot_atom(local: &str) -> bool {
    !local.is_empty() && local.split('.').all(|atom| !atom.is_empty())
}

fn is_qualified_domain(domain: &str) -> bool {
    if domain.starts_with('[') && domain.ends_with(']') {
        return true;
    }
    let mut labels = domain.split('.');
    let first = labels.next().unwrap_or_default();
    let rest: Vec<&str> = labels.collect();
    !first.is_empty() && !rest.is_empty() && rest.iter().all(|label| !label.is_empty())
}
