#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum CreateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("store lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::Poisoned),
            ReadError::Storage(StorageError::Poisoned)
        ));
        assert!(matches!(
            ReadError::from(StorageError::Other("foo".into())),
            ReadError::Storage(error) if error.to_string() == "foo"
        ));
    }

    #[test]
    fn test_update_error_from_storage_error() {
        assert!(matches!(
            UpdateError::from(StorageError::Poisoned),
            UpdateError::Storage(StorageError::Poisoned)
        ));
    }
}
