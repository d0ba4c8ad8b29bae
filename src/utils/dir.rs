use std::path::Path;

/// Builds the 10-character permission column, e.g. `drwxr-xr-x`.
///
/// The leading character only distinguishes directories from everything else.
#[inline]
pub fn permission_string(mode: u32, is_dir: bool) -> String {
    let ft_char = if is_dir { 'd' } else { '-' };
    format!("{}{}", ft_char, super::format::format_permissions(mode))
}

/// Name shown for a path given directly on the command line.
#[inline]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Resolves a uid to a user name, falling back to the numeric id.
#[cfg(unix)]
pub fn user_name(uid: u32) -> String {
    uzers::get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| {
            log::debug!("no user entry for uid {uid}");
            uid.to_string()
        })
}

/// Resolves a gid to a group name, falling back to the numeric id.
#[cfg(unix)]
pub fn group_name(gid: u32) -> String {
    uzers::get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| {
            log::debug!("no group entry for gid {gid}");
            gid.to_string()
        })
}

#[cfg(not(unix))]
pub fn user_name(uid: u32) -> String {
    uid.to_string()
}

#[cfg(not(unix))]
pub fn group_name(gid: u32) -> String {
    gid.to_string()
}
