// Global Ctrl+V observer built on a low-level keyboard hook.
//
// The hook lives on its own thread with its own message loop; the callback
// only updates the chord tracker and calls the handler, which must not block.

use std::sync::mpsc;
use std::sync::{Mutex, OnceLock};
use std::thread::JoinHandle;

use snipit_core::chord::{ChordTracker, KeyDirection, KeyInput};
use windows::Win32::Foundation::{HINSTANCE, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::{VK_CONTROL, VK_LCONTROL, VK_RCONTROL, VK_V};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, HC_ACTION, KBDLLHOOKSTRUCT, MSG,
    PostThreadMessageW, SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, WH_KEYBOARD_LL,
    WM_KEYDOWN, WM_KEYUP, WM_QUIT, WM_SYSKEYDOWN, WM_SYSKEYUP,
};

type ChordHandler = Box<dyn Fn() + Send + Sync>;

// The hook procedure has no user data pointer, so its state is process-wide.
static HANDLER: OnceLock<ChordHandler> = OnceLock::new();
static TRACKER: Mutex<ChordTracker> = Mutex::new(ChordTracker::new());

pub struct KeyboardHook {
    thread_id: u32,
    thread: Option<JoinHandle<()>>,
}

impl KeyboardHook {
    /// Installs the hook; `on_chord` runs on the hook thread for every Ctrl+V.
    ///
    /// One hook per process.
    pub fn install<F>(on_chord: F) -> anyhow::Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        HANDLER
            .set(Box::new(on_chord))
            .map_err(|_| anyhow::anyhow!("keyboard hook already installed"))?;

        let (ready_tx, ready_rx) = mpsc::channel::<anyhow::Result<u32>>();
        let thread = std::thread::Builder::new()
            .name("snipit-keyboard-hook".into())
            .spawn(move || run_hook_thread(ready_tx))?;

        let thread_id = ready_rx
            .recv()
            .map_err(|_| anyhow::anyhow!("keyboard hook thread exited during startup"))??;
        log::info!("keyboard hook installed (thread {thread_id})");

        Ok(Self {
            thread_id,
            thread: Some(thread),
        })
    }

    /// Ends the message loop and waits for the hook thread.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        unsafe {
            if let Err(e) = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) {
                log::warn!("failed to stop keyboard hook thread: {e}");
                return;
            }
        }
        let _ = thread.join();
        log::info!("keyboard hook removed");
    }
}

impl Drop for KeyboardHook {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_hook_thread(ready: mpsc::Sender<anyhow::Result<u32>>) {
    unsafe {
        let hinst: Option<HINSTANCE> = GetModuleHandleW(None).ok().map(Into::into);
        let hook = match SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_proc), hinst, 0) {
            Ok(hook) => hook,
            Err(e) => {
                let _ = ready.send(Err(anyhow::anyhow!("SetWindowsHookExW failed: {e}")));
                return;
            }
        };
        let _ = ready.send(Ok(GetCurrentThreadId()));

        // Low-level hooks are delivered through this thread's message loop.
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).0 > 0 {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        let _ = UnhookWindowsHookEx(hook);
    }
}

unsafe extern "system" fn keyboard_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        // SAFETY: for WH_KEYBOARD_LL with HC_ACTION, lparam points at a KBDLLHOOKSTRUCT.
        let kbd = unsafe { &*(lparam.0 as *const KBDLLHOOKSTRUCT) };
        if let Some(direction) = key_direction(wparam) {
            let fired = TRACKER
                .lock()
                .map(|mut tracker| tracker.on_key(key_input(kbd.vkCode), direction))
                .unwrap_or(false);
            if fired {
                if let Some(handler) = HANDLER.get() {
                    handler();
                }
            }
        }
    }

    // Never swallow the key: the focused app still gets its paste.
    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}

fn key_direction(wparam: WPARAM) -> Option<KeyDirection> {
    match wparam.0 as u32 {
        WM_KEYDOWN | WM_SYSKEYDOWN => Some(KeyDirection::Down),
        WM_KEYUP | WM_SYSKEYUP => Some(KeyDirection::Up),
        _ => None,
    }
}

fn key_input(vk: u32) -> KeyInput {
    match vk {
        v if v == VK_LCONTROL.0 as u32 || v == VK_CONTROL.0 as u32 => KeyInput::LeftControl,
        v if v == VK_RCONTROL.0 as u32 => KeyInput::RightControl,
        v if v == VK_V.0 as u32 => KeyInput::V,
        _ => KeyInput::Other,
    }
}
