//! 转写文本润色模块
//!
//! 注入前从口述转写结果中剔除填充词（"um"、"uh" 之类）。
//! 匹配基于两侧空格的整词形式，普通单词里的子串不受影响。

/// 填充词列表
///
/// 两侧带空格的整词形式，含常见的逗号尾随变体
const FILLER_WORDS: [&str; 15] = [
    " um ", " uh ", " hmm ", " uhh ", " umm ",
    " like ", " you know ", " I mean ",
    " sort of ", " kind of ",
    " basically ", " actually ",
    " um,", " uh,", " hmm,",
];

/// 剔除转写文本中的填充词
///
/// 输入两侧补空格后循环替换，最后折叠多余空白。
/// 只命中独立出现的填充词："plumber" 中的 "um" 不会被碰。
///
/// # Examples
///
/// ```
/// use fair9_core::input::clean_filler_words;
///
/// let cleaned = clean_filler_words("I um want to uh create a function");
/// assert_eq!(cleaned, "I want to create a function");
/// ```
pub fn clean_filler_words(text: &str) -> String {
    let mut result = format!(" {} ", text);
    for filler in &FILLER_WORDS {
        while result.contains(filler) {
            result = result.replace(filler, " ");
        }
    }
    result.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_filler_basic() {
        let input = "I um want to uh create a function";
        assert_eq!(clean_filler_words(input), "I want to create a function");
    }

    #[test]
    fn test_clean_filler_multiple() {
        let input = "so um like basically I you know think hmm we should";
        assert_eq!(clean_filler_words(input), "so I think we should");
    }

    #[test]
    fn test_clean_filler_no_false_positives() {
        // "like" 独立出现会被剔除，但 "plumber" 中的 "um" 保留
        let input = "I would like to book a plumber";
        assert_eq!(clean_filler_words(input), "I would to book a plumber");
    }

    #[test]
    fn test_clean_filler_empty() {
        assert_eq!(clean_filler_words(""), "");
    }

    #[test]
    fn test_clean_filler_with_trailing_comma() {
        let input = "well um, I think so";
        assert_eq!(clean_filler_words(input), "well I think so");
    }

    #[test]
    fn test_clean_filler_collapses_whitespace() {
        let input = "hello   um   world";
        assert_eq!(clean_filler_words(input), "hello world");
    }
}
