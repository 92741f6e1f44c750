use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Local storage slot of a persisted preference.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
    fn local_save(&self);
}

impl<T: StorageKey + Serialize + DeserializeOwned> LocalOrDefault for Option<T> {
    fn local_or_default() -> Self {
        LocalStorage::get(T::KEY).ok()
    }

    fn local_save(&self) {
        match self {
            Some(value) => {
                if let Err(err) = LocalStorage::set(T::KEY, value) {
                    log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
                }
            }
            None => LocalStorage::delete(T::KEY),
        }
    }
}

/// Helper function to use JavaScript's Math.random
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    u64::from_be_bytes([
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
        (256. * random()) as u8,
    ])
}
