// Folder lookup for the window under the cursor.
// Kept behind cfg(windows) at the module level in windows.rs.

use std::ffi::OsString;
use std::os::windows::ffi::OsStringExt;
use std::path::PathBuf;

use snipit_core::types::ScreenPoint;
use windows::Win32::Foundation::{CloseHandle, POINT};
use windows::Win32::System::Com::{
    CLSCTX_ALL, COINIT_APARTMENTTHREADED, CoCreateInstance, CoInitializeEx, CoUninitialize,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION, QueryFullProcessImageNameW,
};
use windows::Win32::UI::Shell::{
    Folder2, IShellFolderViewDual, IShellWindows, IWebBrowserApp, ShellWindows,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetParent, GetWindowThreadProcessId, WindowFromPoint,
};
use windows::core::{Interface, PWSTR, VARIANT};

pub fn cursor_position() -> anyhow::Result<ScreenPoint> {
    let mut pt = POINT::default();
    unsafe { GetCursorPos(&mut pt)? };
    Ok(ScreenPoint::new(pt.x, pt.y))
}

/// Folder displayed by the file-manager window at `point`, if any.
pub fn folder_at(point: ScreenPoint, file_managers: &[String]) -> anyhow::Result<Option<PathBuf>> {
    let hwnd = unsafe { WindowFromPoint(POINT { x: point.x, y: point.y }) };
    if hwnd.0.is_null() {
        return Ok(None);
    }

    let mut pid: u32 = 0;
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
    if pid == 0 {
        return Err(anyhow::anyhow!("no owning process for window {:?}", hwnd.0));
    }

    let exe_path = get_process_exe_path(pid)?;
    let process_name = std::path::Path::new(&exe_path)
        .file_name()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    if !file_managers.iter().any(|m| m.eq_ignore_ascii_case(&process_name)) {
        log::debug!("window under cursor belongs to {process_name}, not a file manager");
        return Ok(None);
    }

    let _com = ComApartment::enter()?;
    let open = open_shell_windows()?;

    // The hit is often a child (list view, address bar); climb to the frame.
    let mut current = hwnd;
    loop {
        if let Some((_, browser)) = open.iter().find(|(h, _)| *h == current.0 as isize) {
            return displayed_folder(browser);
        }
        match unsafe { GetParent(current) } {
            Ok(parent) if !parent.0.is_null() => current = parent,
            _ => return Ok(None),
        }
    }
}

struct ComApartment;

impl ComApartment {
    fn enter() -> anyhow::Result<Self> {
        unsafe { CoInitializeEx(None, COINIT_APARTMENTTHREADED).ok()? };
        Ok(Self)
    }
}

impl Drop for ComApartment {
    fn drop(&mut self) {
        unsafe { CoUninitialize() };
    }
}

fn open_shell_windows() -> anyhow::Result<Vec<(isize, IWebBrowserApp)>> {
    unsafe {
        let windows: IShellWindows = CoCreateInstance(&ShellWindows, None, CLSCTX_ALL)?;
        let count = windows.Count()?;

        let mut out = Vec::with_capacity(count.max(0) as usize);
        for index in 0..count {
            // Windows closing mid-enumeration show up as holes; skip them.
            let Ok(item) = windows.Item(&VARIANT::from(index)) else {
                continue;
            };
            let Ok(browser) = item.cast::<IWebBrowserApp>() else {
                continue;
            };
            let Ok(handle) = browser.HWND() else {
                continue;
            };
            out.push((handle.0 as isize, browser));
        }
        Ok(out)
    }
}

fn displayed_folder(browser: &IWebBrowserApp) -> anyhow::Result<Option<PathBuf>> {
    unsafe {
        let document = browser.Document()?;
        let view: IShellFolderViewDual = document.cast()?;
        let folder: Folder2 = view.Folder()?.cast()?;
        let path = folder.Self_()?.Path()?.to_string();

        // Virtual folders (This PC, Recycle Bin) report a `::{CLSID}` path.
        if path.is_empty() || path.starts_with("::") {
            return Ok(None);
        }
        Ok(Some(PathBuf::from(path)))
    }
}

fn get_process_exe_path(pid: u32) -> anyhow::Result<String> {
    unsafe {
        // QueryFullProcessImageNameW works with the limited right alone.
        let handle = OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid)?;

        let mut buf = vec![0u16; 4096];
        let mut len = buf.len() as u32;
        let queried =
            QueryFullProcessImageNameW(handle, PROCESS_NAME_WIN32, PWSTR(buf.as_mut_ptr()), &mut len);
        let _ = CloseHandle(handle);

        if let Err(e) = queried {
            return Err(anyhow::anyhow!("failed to query exe path for pid {pid}: {e}"));
        }

        buf.truncate(len as usize);
        let os = OsString::from_wide(&buf);
        Ok(os.to_string_lossy().to_string())
    }
}
