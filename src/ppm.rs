//! Reading and writing of image files
//!
//! The format follows the file extension, PNG and PPM (Portable Pixmap
//!   Format) are supported.
//!
//! See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//!
use std::path::Path;

use log::debug;

use crate::error::Error;

/// Read an image as 8 bit RGB, returns (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize), Error> {
    let img = image::open(filename)?.to_rgb();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}
/// Write 8 bit RGB data of width x height
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<(), Error> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::RGB(8))?;
    Ok(())
}

/// Images have the same size and identical pixels
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, Error> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("IMG DIFF: size {}x{} != {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("IMG DIFF: {} [{},{},{}]: {} {}", i, (i/3)%w1,(i/3)/w1,i%3, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
