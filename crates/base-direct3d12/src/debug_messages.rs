use tracing::debug;
use tracing::error;
use tracing::info;
use tracing::warn;
use windows::Win32::Graphics::Dxgi::*;

/// Drains the messages stored in the DXGI info queue into the log.
pub fn print_dxgi_debug_messages(info_queue: &Option<IDXGIInfoQueue>) {
    let Some(queue) = info_queue else {
        debug!("DXGI info queue not available");
        return;
    };

    let num_messages = unsafe { queue.GetNumStoredMessages(DXGI_DEBUG_ALL) };
    for i in 0..num_messages {
        let mut message_size: usize = 0;
        if unsafe { queue.GetMessage(DXGI_DEBUG_ALL, i, None, &mut message_size) }.is_err() {
            warn!("Could not size DXGI message {}", i);
            continue;
        }

        // The message struct is followed by its description in the same allocation.
        let mut message_buffer: Vec<u8> = vec![0; message_size];
        let p_message = message_buffer.as_mut_ptr() as *mut DXGI_INFO_QUEUE_MESSAGE;
        if unsafe { queue.GetMessage(DXGI_DEBUG_ALL, i, Some(p_message), &mut message_size) }
            .is_err()
        {
            warn!("Could not read DXGI message {}", i);
            continue;
        }

        let message = unsafe { &*p_message };
        let description = unsafe {
            std::slice::from_raw_parts(
                message.pDescription as *const u8,
                message.DescriptionByteLength,
            )
        };
        let description = String::from_utf8_lossy(description)
            .trim_end_matches('\0')
            .trim()
            .to_string();

        match message.Severity {
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_CORRUPTION | DXGI_INFO_QUEUE_MESSAGE_SEVERITY_ERROR => {
                error!("DXGI [ID:{}]: {}", message.ID, description)
            }
            DXGI_INFO_QUEUE_MESSAGE_SEVERITY_WARNING => {
                warn!("DXGI [ID:{}]: {}", message.ID, description)
            }
            _ => info!("DXGI [ID:{}]: {}", message.ID, description),
        }
    }

    unsafe { queue.ClearStoredMessages(DXGI_DEBUG_ALL) };
}
