//! [`CipherContext`] ties a [`BlockCipher`], a [mode](super::modes) and a
//! [padding scheme](super::padding) together into the single entry point
//! most callers want: `encrypt`/`decrypt` on whole buffers or files.

use {
    super::{
        modes::{self, CipherModeTag, Mode, ModeError},
        padding::{self, PaddingError, PaddingMode},
        BlockCipher, CipherError,
    },
    std::{fmt, fs, path::Path, sync::mpsc, sync::Arc, thread},
};

#[derive(Debug)]
pub enum ContextError {
    Cipher(CipherError),
    Mode(ModeError),
    Padding(PaddingError),
    MissingIv(&'static str),
    Io(std::io::Error),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cipher(e) => write!(f, "failed to set key: {e}"),
            Self::Mode(e) => write!(f, "{e}"),
            Self::Padding(e) => write!(f, "{e}"),
            Self::MissingIv(mode) => write!(f, "{mode} mode requires an IV"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cipher(e) => Some(e),
            Self::Mode(e) => Some(e),
            Self::Padding(e) => Some(e),
            Self::MissingIv(_) => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<CipherError> for ContextError {
    fn from(e: CipherError) -> Self {
        Self::Cipher(e)
    }
}

impl From<ModeError> for ContextError {
    fn from(e: ModeError) -> Self {
        Self::Mode(e)
    }
}

impl From<PaddingError> for ContextError {
    fn from(e: PaddingError) -> Self {
        Self::Padding(e)
    }
}

impl From<std::io::Error> for ContextError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Outcome of an asynchronous encrypt/decrypt, delivered over the channel
/// returned by [`CipherContext::encrypt_async`]/[`decrypt_async`](CipherContext::decrypt_async).
pub type CipherResult = Result<Vec<u8>, ContextError>;

pub struct CipherContext {
    cipher: Box<dyn BlockCipher + Send + Sync>,
    mode: Box<dyn Mode + Send + Sync>,
    padding_mode: PaddingMode,
    tag: CipherModeTag,
}

impl CipherContext {
    pub fn new(
        mut cipher: Box<dyn BlockCipher + Send + Sync>,
        key: &[u8],
        tag: CipherModeTag,
        padding_mode: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, ContextError> {
        cipher.set_key(key)?;

        let mode: Box<dyn Mode + Send + Sync> = match tag {
            CipherModeTag::Ecb => Box::new(modes::Ecb),
            CipherModeTag::Cbc => Box::new(modes::Cbc::new(iv.ok_or(ContextError::MissingIv("CBC"))?)),
            CipherModeTag::Pcbc => {
                Box::new(modes::Pcbc::new(iv.ok_or(ContextError::MissingIv("PCBC"))?))
            }
            CipherModeTag::Cfb => Box::new(modes::Cfb::new(iv.ok_or(ContextError::MissingIv("CFB"))?)),
            CipherModeTag::Ofb => Box::new(modes::Ofb::new(iv.ok_or(ContextError::MissingIv("OFB"))?)),
            CipherModeTag::Ctr => Box::new(modes::Ctr::new(iv.ok_or(ContextError::MissingIv("CTR"))?)),
            CipherModeTag::RandomDelta => Box::new(modes::RandomDelta::new(
                iv.ok_or(ContextError::MissingIv("RandomDelta"))?,
            )),
        };

        Ok(Self {
            cipher,
            mode,
            padding_mode,
            tag,
        })
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, ContextError> {
        let to_encrypt = if self.tag.is_stream() {
            plaintext.to_vec()
        } else {
            padding::pad(plaintext, self.cipher.block_size(), self.padding_mode)?
        };
        Ok(self.mode.encrypt(self.cipher.as_ref(), &to_encrypt)?)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, ContextError> {
        let decrypted = self.mode.decrypt(self.cipher.as_ref(), ciphertext)?;
        if self.tag.is_stream() {
            Ok(decrypted)
        } else {
            Ok(padding::unpad(&decrypted, self.padding_mode)?)
        }
    }

    pub fn encrypt_file(&self, input_path: &Path, output_path: &Path) -> Result<(), ContextError> {
        let plaintext = fs::read(input_path)?;
        let ciphertext = self.encrypt(&plaintext)?;
        fs::write(output_path, ciphertext)?;
        Ok(())
    }

    pub fn decrypt_file(&self, input_path: &Path, output_path: &Path) -> Result<(), ContextError> {
        let ciphertext = fs::read(input_path)?;
        let plaintext = self.decrypt(&ciphertext)?;
        fs::write(output_path, plaintext)?;
        Ok(())
    }

    /// Runs [`encrypt`](Self::encrypt) on a worker thread, returning a
    /// receiver that yields the result once it's ready.
    pub fn encrypt_async(self: &Arc<Self>, plaintext: Vec<u8>) -> mpsc::Receiver<CipherResult> {
        let (tx, rx) = mpsc::channel();
        let ctx = Arc::clone(self);
        thread::spawn(move || {
            let _ = tx.send(ctx.encrypt(&plaintext));
        });
        rx
    }

    pub fn decrypt_async(self: &Arc<Self>, ciphertext: Vec<u8>) -> mpsc::Receiver<CipherResult> {
        let (tx, rx) = mpsc::channel();
        let ctx = Arc::clone(self);
        thread::spawn(move || {
            let _ = tx.send(ctx.decrypt(&ciphertext));
        });
        rx
    }
}
