//! Record storage in the nRF52840's internal flash.
//!
//! The app expects a small file store with paths. On the device that is a
//! `sequential-storage` key-value map in a reserved flash region: each
//! path is hashed to a `u32` key and the file bytes are the value.
//! `sequential-storage` takes care of wear levelling and garbage collection.
//!
//! The flash driver is blocking (NVMC) and wrapped in `BlockingAsync`;
//! every operation is driven to completion with `block_on`, so scenes see
//! a plain synchronous `FileStorage`.

use defmt::{debug, error, info};
use embassy_futures::block_on;
use embedded_storage_async::nor_flash::NorFlash;
use id_card::config::{MAX_FILE_SIZE, STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use id_card::{Error, FileStorage};
use sequential_storage::cache::NoCache;
use sequential_storage::map::{fetch_item, store_item};

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Scratch space for one item: key, length header and the largest file.
const ITEM_BUFFER_SIZE: usize = MAX_FILE_SIZE + 32;

/// FNV-1a hash of a path, used as the map key.
fn path_key(path: &str) -> u32 {
    path.bytes().fold(0x811c_9dc5, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    })
}

pub struct FlashStorage<F> {
    flash: F,
    buffer: [u8; ITEM_BUFFER_SIZE],
}

impl<F: NorFlash> FlashStorage<F> {
    pub fn new(flash: F) -> Self {
        info!(
            "Storage: flash region {=u32:#x}..{=u32:#x}",
            STORAGE_START, STORAGE_END
        );
        Self {
            flash,
            buffer: [0; ITEM_BUFFER_SIZE],
        }
    }
}

impl<F: NorFlash> FileStorage for FlashStorage<F> {
    fn read(&mut self, path: &str, buf: &mut [u8]) -> Result<usize, Error> {
        let key = path_key(path);
        let fetched = block_on(fetch_item::<u32, &[u8], _>(
            &mut self.flash,
            STORAGE_START..STORAGE_END,
            &mut NoCache::new(),
            &mut self.buffer,
            &key,
        ));

        match fetched {
            Ok(Some(data)) => {
                let copied = data.len().min(buf.len());
                buf[..copied].copy_from_slice(&data[..copied]);
                debug!("Storage: read {} bytes from {=str}", data.len(), path);
                Ok(data.len())
            }
            Ok(None) => Err(Error::NotFound),
            Err(e) => {
                error!("Storage: read of {=str} failed: {:?}", path, defmt::Debug2Format(&e));
                Err(Error::Storage)
            }
        }
    }

    fn write(&mut self, path: &str, data: &[u8]) -> Result<(), Error> {
        let key = path_key(path);
        let stored = block_on(store_item::<u32, &[u8], _>(
            &mut self.flash,
            STORAGE_START..STORAGE_END,
            &mut NoCache::new(),
            &mut self.buffer,
            &key,
            &data,
        ));

        match stored {
            Ok(()) => {
                debug!("Storage: wrote {} bytes to {=str}", data.len(), path);
                Ok(())
            }
            Err(e) => {
                error!("Storage: write of {=str} failed: {:?}", path, defmt::Debug2Format(&e));
                Err(Error::Storage)
            }
        }
    }
}
