/*
This code is part of the Corral geometry analysis library.
Authors: Sam Whitfield
Created: 08/06/2023
Last Modified: 08/06/2023
License: MIT
*/
use crate::structures::Point2D;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Error, ErrorKind, Write};

/// Reads a whitespace-delimited points file. The first non-blank line gives
/// the point count and each following non-blank line holds one `x y` pair.
/// Lines beyond the declared count are ignored. Malformed content is reported
/// as `InvalidData`, naming the offending line.
pub fn read_points_file(file_name: &str) -> Result<Vec<Point2D>, Error> {
    let f = File::open(file_name)?;
    let f = BufReader::new(f);

    let mut points: Vec<Point2D> = vec![];
    let mut num_points = 0usize;
    let mut header_read = false;
    let mut line_num = 0usize;
    for line in f.lines() {
        let line = line?;
        line_num += 1;
        let s = line.trim();
        if s.is_empty() {
            continue;
        }
        if !header_read {
            num_points = match s.parse::<usize>() {
                Ok(n) => n,
                Err(_) => {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("Error parsing the point count on line {} ('{}').", line_num, s),
                    ))
                }
            };
            points.reserve(num_points);
            header_read = true;
            continue;
        }
        if points.len() == num_points {
            break;
        }
        let vals: Vec<&str> = s.split_whitespace().collect();
        if vals.len() != 2 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Error reading the point on line {}: expected two coordinates, found {}.",
                    line_num,
                    vals.len()
                ),
            ));
        }
        let x = match vals[0].parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "Error parsing the x coordinate on line {} ('{}').",
                        line_num, vals[0]
                    ),
                ))
            }
        };
        let y = match vals[1].parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!(
                        "Error parsing the y coordinate on line {} ('{}').",
                        line_num, vals[1]
                    ),
                ))
            }
        };
        points.push(Point2D::new(x, y));
    }

    if !header_read {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "The points file is empty; the first non-blank line must give the point count.",
        ));
    }
    if points.len() < num_points {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "The points file ended after {} of {} expected points.",
                points.len(),
                num_points
            ),
        ));
    }
    Ok(points)
}

/// Writes a points file in the format that `read_points_file` reads: the
/// point count on the first line, then one `x y` pair per line.
pub fn write_points_file(file_name: &str, points: &[Point2D]) -> Result<(), Error> {
    let f = File::create(file_name)?;
    let mut writer = BufWriter::new(f);
    writer.write_all(format!("{}\n", points.len()).as_bytes())?;
    for p in points {
        writer.write_all(format!("{} {}\n", p.x, p.y).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{read_points_file, write_points_file};
    use crate::structures::Point2D;
    use std::fs;
    use std::io::ErrorKind;

    fn temp_file(name: &str) -> String {
        std::env::temp_dir()
            .join(name)
            .to_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_write_then_read() {
        let file_name = temp_file("corral_points_roundtrip.txt");
        let points = vec![
            Point2D::new(0.5, -1.25),
            Point2D::new(3.0, 4.0),
            Point2D::new(-1.0e9, 9.875e8),
        ];
        write_points_file(&file_name, &points).unwrap();
        let read_back = read_points_file(&file_name).unwrap();
        assert_eq!(read_back, points);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let file_name = temp_file("corral_points_blanks.txt");
        fs::write(&file_name, "\n2\n\n1 0\n\n2.5 -5\n").unwrap();
        let points = read_points_file(&file_name).unwrap();
        assert_eq!(points, vec![Point2D::new(1.0, 0.0), Point2D::new(2.5, -5.0)]);
    }

    #[test]
    fn test_zero_count() {
        let file_name = temp_file("corral_points_zero.txt");
        fs::write(&file_name, "0\n").unwrap();
        assert!(read_points_file(&file_name).unwrap().is_empty());
    }

    #[test]
    fn test_bad_count_is_rejected() {
        let file_name = temp_file("corral_points_bad_count.txt");
        fs::write(&file_name, "abc\n1 2\n").unwrap();
        let err = read_points_file(&file_name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_truncated_file_is_rejected() {
        let file_name = temp_file("corral_points_truncated.txt");
        fs::write(&file_name, "3\n1 0\n2 0\n").unwrap();
        let err = read_points_file(&file_name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn test_bad_coordinate_is_rejected() {
        let file_name = temp_file("corral_points_bad_coord.txt");
        fs::write(&file_name, "2\n1 0\nx 2\n").unwrap();
        let err = read_points_file(&file_name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let file_name = temp_file("corral_points_three_values.txt");
        fs::write(&file_name, "1\n1 2 3\n").unwrap();
        let err = read_points_file(&file_name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
